//! CLI command implementations

pub mod check;
pub mod customers;
pub mod delete;
pub mod list;
pub mod options;
pub mod services;
pub mod set_status;
pub mod show;
pub mod stats;

use std::path::Path;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs;
use crate::schemas::{Booking, Config};
use crate::store::{BookingService, HttpBookingApi};

/// Global options every backend-facing command shares
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalArgs<'a> {
    pub cwd: Option<&'a Path>,
    pub api_url: Option<&'a str>,
}

/// Load configuration and build a booking service seeded from the cache.
pub(crate) fn open_service(args: GlobalArgs<'_>) -> Result<(Config, BookingService<HttpBookingApi>)> {
    let root = fs::resolve_cwd(args.cwd);
    let mut config = load_config(&root)?;
    if let Some(url) = args.api_url {
        config.api_base_url = url.to_string();
    }

    let mut service = BookingService::new(HttpBookingApi::new(&config)?);
    if config.cache_enabled {
        service = service.with_cache(fs::get_cache_path(&root));
        if let Err(e) = service.load_cache() {
            tracing::warn!("Ignoring unreadable booking cache: {}", e);
        }
    }
    Ok((config, service))
}

/// Refresh from the backend, falling back to cached bookings when it is unreachable.
pub(crate) async fn refresh_or_cached(service: &mut BookingService<HttpBookingApi>) -> Result<()> {
    match service.refresh().await {
        Ok(_) => Ok(()),
        Err(e) if !service.store().is_empty() => {
            tracing::warn!("Backend unavailable, showing cached bookings: {}", e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// One-line summary used by `list`
pub(crate) fn booking_line(booking: &Booking) -> String {
    let id = booking
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    let date = booking.date.get(..10).unwrap_or(&booking.date);
    format!(
        "{:<8} {:<10} {:<10} {} ({}) - {}",
        id, booking.status, date, booking.name, booking.phone, booking.service
    )
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| crate::errors::HomyError::InvalidJson(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
