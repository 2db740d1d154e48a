//! Schema types for homy
//!
//! Field names follow the booking backend's camelCase JSON.

mod booking;
mod config;
mod customer;
mod payload;
mod service;
mod stats;
mod wire;

pub use booking::{Booking, BookingStatus};
pub use config::{Config, DEFAULT_API_BASE_URL};
pub use customer::{Customer, CustomerEntry};
pub use payload::{AddedService, StatusUpdatePayload};
pub use service::{Service, ServiceUpdate};
pub use stats::BookingStats;
pub use wire::{BookingId, EntityId, ServiceId};
