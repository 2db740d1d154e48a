//! Homy - Booking status engine and admin CLI for the Homy sofa services backend
//!
//! This library provides the core functionality for the homy CLI, including:
//! - Schema definitions for bookings, services, payloads and config
//! - Domain logic for booking statuses, transitions and form validation
//! - The booking store, its HTTP backend and the local cache
//! - Service catalogue management and the customer listing
//! - Status change orchestration (decide, collect, apply, revert)

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;
pub mod store;
pub mod workflow;

// Re-export commonly used types
pub use errors::{HomyError, Result};
pub use schemas::{Booking, BookingId, BookingStatus, Config, StatusUpdatePayload};
