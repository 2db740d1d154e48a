//! Status update payload - merge-patch body sent when a booking changes status

use serde::{Deserialize, Serialize};

use super::BookingStatus;

/// An extra service attached to a booking on approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddedService {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Body of `PUT /bookings/{id}`.
///
/// Only `status` is always present; the auxiliary fields depend on the
/// requested status and are omitted when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdatePayload {
    pub status: BookingStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_services: Option<Vec<AddedService>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    /// YYYY-MM-DD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,
}

impl StatusUpdatePayload {
    /// Payload carrying only the status
    pub fn status_only(status: BookingStatus) -> Self {
        StatusUpdatePayload {
            status,
            admin_notes: None,
            extra_amount: None,
            added_services: None,
            total_amount: None,
            completion_date: None,
            cancel_reason: None,
        }
    }
}
