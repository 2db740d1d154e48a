//! Booking status state machine definitions
//!
//! PENDING → APPROVED → COMPLETED
//!    └────→ CANCELLED
//!
//! COMPLETED and CANCELLED are terminal.

use crate::schemas::BookingStatus;

/// The canonical ordering of booking statuses.
pub const BOOKING_STATUSES: &[BookingStatus] = &[
    BookingStatus::Pending,
    BookingStatus::Approved,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

/// Static adjacency table: the forward edges out of each status.
///
/// Terminal states have no outgoing edges.
pub fn allowed_targets(current: BookingStatus) -> &'static [BookingStatus] {
    match current {
        BookingStatus::Pending => &[BookingStatus::Approved, BookingStatus::Cancelled],
        BookingStatus::Approved => &[BookingStatus::Completed],
        BookingStatus::Completed => &[],
        BookingStatus::Cancelled => &[],
    }
}

/// Check if a status is terminal (completed or cancelled).
pub fn is_terminal_state(status: BookingStatus) -> bool {
    allowed_targets(status).is_empty()
}

/// Normalize a raw status string to a known status.
///
/// Case-insensitive; surrounding whitespace is ignored. Unknown strings map to None.
pub fn normalize_status(raw: &str) -> Option<BookingStatus> {
    BookingStatus::parse(raw)
}
