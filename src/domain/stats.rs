//! Dashboard statistics over the booking list

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::schemas::{Booking, BookingStats, BookingStatus};

use super::normalize::parse_booking_date;

fn is_completed(booking: &Booking) -> bool {
    booking.status() == Some(BookingStatus::Completed)
}

/// Count bookings per status and total the revenue of completed ones.
///
/// Unknown statuses count toward the total only.
pub fn compute_stats(bookings: &[Booking]) -> BookingStats {
    let mut stats = BookingStats {
        total_bookings: bookings.len(),
        ..Default::default()
    };

    for booking in bookings {
        match booking.status() {
            Some(BookingStatus::Pending) => stats.pending_bookings += 1,
            Some(BookingStatus::Approved) => stats.approved_bookings += 1,
            Some(BookingStatus::Completed) => {
                stats.completed_bookings += 1;
                stats.total_revenue += booking.amount();
            }
            Some(BookingStatus::Cancelled) => stats.cancelled_bookings += 1,
            None => {}
        }
    }

    stats.total_customers = bookings
        .iter()
        .map(customer_key)
        .collect::<HashSet<_>>()
        .len();

    if stats.completed_bookings > 0 {
        stats.average_value = stats.total_revenue / stats.completed_bookings as f64;
    }
    stats
}

/// Who a booking belongs to: customer id, else email, else phone
fn customer_key(booking: &Booking) -> String {
    if let Some(id) = &booking.customer_id {
        return id.to_string();
    }
    if !booking.email.is_empty() {
        return booking.email.clone();
    }
    booking.phone.clone()
}

/// Revenue of completed bookings dated within the given month
pub fn monthly_revenue(bookings: &[Booking], year: i32, month: u32) -> f64 {
    bookings
        .iter()
        .filter(|b| is_completed(b))
        .filter(|b| {
            parse_booking_date(&b.date).is_some_and(|d| d.year() == year && d.month() == month)
        })
        .map(Booking::amount)
        .sum()
}

/// Number of bookings whose service date is `today`
pub fn todays_bookings(bookings: &[Booking], today: NaiveDate) -> usize {
    bookings
        .iter()
        .filter(|b| parse_booking_date(&b.date) == Some(today))
        .count()
}

/// The latest `limit` bookings by service date, newest first.
///
/// Bookings with no readable date sort last, keeping their list order.
pub fn recent_bookings(bookings: &[Booking], limit: usize) -> Vec<&Booking> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by_key(|b| std::cmp::Reverse(parse_booking_date(&b.date)));
    sorted.truncate(limit);
    sorted
}
