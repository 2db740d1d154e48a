//! Booking schema - The record kept by the backend for each customer request

use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, BookingId, EntityId};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Submitted by the customer, awaiting an operator
    Pending,
    /// Accepted by an operator
    Approved,
    /// Service delivered (terminal)
    Completed,
    /// Dropped before completion (terminal)
    Cancelled,
}

impl BookingStatus {
    /// Canonical upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Completed => "COMPLETED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Parse a status case-insensitively, ignoring surrounding whitespace.
    ///
    /// Returns None for anything that is not one of the four statuses.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Some(BookingStatus::Pending),
            "APPROVED" => Some(BookingStatus::Approved),
            "COMPLETED" => Some(BookingStatus::Completed),
            "CANCELLED" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::parse(s).ok_or_else(|| format!("Unknown booking status: {}", s))
    }
}

/// A customer booking as exchanged with the backend
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Backend identifier (absent until the backend assigns one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookingId>,

    /// Customer name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    /// Customer phone
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,

    /// Customer email
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    /// Service name or service id
    #[serde(default, deserialize_with = "null_as_empty")]
    pub service: String,

    /// Service date, ISO 8601 after normalization
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,

    /// Raw status string as received; see [`Booking::status`]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_slot: Option<String>,

    /// When the booking was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_date: Option<String>,

    /// When the booking was completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// "lat,lon"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat_long: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Fields this crate does not model, kept so they round-trip untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Booking {
    /// Create a pending booking for a customer
    pub fn new(name: impl Into<String>, phone: impl Into<String>, service: impl Into<String>) -> Self {
        Booking {
            name: name.into(),
            phone: phone.into(),
            service: service.into(),
            status: BookingStatus::Pending.to_string(),
            ..Default::default()
        }
    }

    /// Parsed status, or None when the backend sent something unrecognized
    pub fn status(&self) -> Option<BookingStatus> {
        BookingStatus::parse(&self.status)
    }

    /// Return a new Booking with the given id
    pub fn with_id(mut self, id: impl Into<BookingId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Return a new Booking with the given status
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status.to_string();
        self
    }

    /// Whether this booking carries the given id
    pub fn has_id(&self, key: &str) -> bool {
        self.id.as_ref().is_some_and(|id| id.matches(key))
    }

    /// Displayed amount: explicit price first, then the completion total
    pub fn amount(&self) -> f64 {
        self.price.or(self.total_amount).unwrap_or(0.0)
    }
}
