//! List command - List bookings with optional filtering

use crate::errors::{HomyError, Result};
use crate::schemas::{Booking, BookingStatus};
use crate::store::BookingStore;

use super::{booking_line, open_service, print_json, refresh_or_cached, GlobalArgs};

/// List bookings, optionally filtered by status and a search query
pub async fn run(args: GlobalArgs<'_>, json: bool, status: Option<&str>, search: Option<&str>) -> Result<()> {
    let status = status
        .map(|raw| BookingStatus::parse(raw).ok_or_else(|| HomyError::InvalidStatus(raw.to_string())))
        .transpose()?;

    let (_, mut service) = open_service(args)?;
    refresh_or_cached(&mut service).await?;

    let bookings = select(service.store(), status, search);

    if json {
        return print_json(&bookings);
    }

    if bookings.is_empty() {
        println!("No bookings found");
        return Ok(());
    }
    for booking in &bookings {
        println!("{}", booking_line(booking));
    }
    Ok(())
}

fn select<'a>(store: &'a BookingStore, status: Option<BookingStatus>, search: Option<&str>) -> Vec<&'a Booking> {
    store
        .search(search.unwrap_or_default())
        .into_iter()
        .filter(|b| status.map_or(true, |s| b.status() == Some(s)))
        .collect()
}
