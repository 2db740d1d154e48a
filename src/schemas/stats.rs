//! Stats schema - Dashboard summary over the booking list

use serde::{Deserialize, Serialize};

/// Aggregate counts and revenue for the admin dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub approved_bookings: usize,
    pub completed_bookings: usize,
    pub cancelled_bookings: usize,
    /// Distinct customers, keyed by customer id, email or phone
    pub total_customers: usize,
    /// Revenue from completed bookings only
    pub total_revenue: f64,
    /// Revenue per completed booking
    pub average_value: f64,
}
