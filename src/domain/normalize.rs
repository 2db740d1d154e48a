//! Booking normalization
//!
//! The backend has shipped bookings in several shapes over time: the service
//! under different keys and dates as `dd/mm/yyyy`. Everything entering the
//! store goes through [`normalize_booking`].

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::schemas::Booking;

lazy_static::lazy_static! {
    static ref DMY_DATE_REGEX: Regex =
        Regex::new(r"^\s*(\d{1,2})\s*/\s*(\d{1,2})\s*/\s*(\d{4})\s*$").unwrap();
}

/// Legacy keys the service name may arrive under, in priority order
const SERVICE_ALIASES: &[&str] = &["serviceType", "serviceName", "service_type"];

/// Parse a `dd/mm/yyyy` date. Out-of-range days or months yield None.
pub fn parse_dmy_date(raw: &str) -> Option<NaiveDate> {
    let caps = DMY_DATE_REGEX.captures(raw)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a booking date in any of the shapes the backend uses:
/// RFC 3339, `YYYY-MM-DD` or `dd/mm/yyyy`.
pub fn parse_booking_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    parse_dmy_date(raw)
}

/// Rewrite a `dd/mm/yyyy` date as ISO 8601 midnight UTC.
///
/// Anything else, including unparseable slash dates, is returned unchanged.
pub fn normalize_date(raw: &str) -> String {
    if !raw.contains('/') {
        return raw.to_string();
    }
    match parse_dmy_date(raw) {
        Some(date) => format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")),
        None => raw.to_string(),
    }
}

/// Return a normalized copy of a booking: service name resolved from legacy
/// keys and the date rewritten to ISO form.
pub fn normalize_booking(mut booking: Booking) -> Booking {
    if booking.service.trim().is_empty() {
        let alias = SERVICE_ALIASES.iter().find_map(|key| {
            booking
                .extra
                .get(*key)
                .and_then(|value| value.as_str())
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
        });
        if let Some(service) = alias {
            booking.service = service;
        }
    }
    booking.date = normalize_date(&booking.date);
    booking
}
