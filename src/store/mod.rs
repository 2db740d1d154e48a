//! Booking state: backend API, in-memory store and cache synchronisation

mod api;
mod booking_store;
mod http;
mod sync;

#[cfg(test)]
pub(crate) mod testing;

pub use api::BookingApi;
pub use booking_store::{BookingStore, SubscriptionId};
pub use http::HttpBookingApi;
pub use sync::BookingService;
