//! Booking backend interface

use crate::errors::Result;
use crate::schemas::{
    Booking, BookingId, Customer, Service, ServiceId, ServiceUpdate, StatusUpdatePayload,
};

/// Remote booking API.
///
/// Implemented over HTTP by [`super::HttpBookingApi`]; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait BookingApi {
    /// `GET /bookings`
    async fn list_bookings(&self) -> Result<Vec<Booking>>;

    /// `GET /bookings/{id}`
    async fn get_booking(&self, id: &BookingId) -> Result<Booking>;

    /// `PUT /bookings/{id}?sendEmail={send_email}` with a merge-patch payload.
    ///
    /// Returns the backend's copy of the updated booking.
    async fn update_booking_status(
        &self,
        id: &BookingId,
        payload: &StatusUpdatePayload,
        send_email: bool,
    ) -> Result<Booking>;

    /// `DELETE /bookings/{id}`
    async fn delete_booking(&self, id: &BookingId) -> Result<()>;

    /// `GET /services`
    async fn list_services(&self) -> Result<Vec<Service>>;

    /// `POST /services`, returning the stored entry with its id
    async fn create_service(&self, service: &Service) -> Result<Service>;

    /// `PUT /services/{id}` with only the fields being changed
    async fn update_service(&self, id: &ServiceId, update: &ServiceUpdate) -> Result<Service>;

    /// `DELETE /services/{id}`
    async fn delete_service(&self, id: &ServiceId) -> Result<()>;

    /// `GET /admin/customers`
    async fn list_customers(&self) -> Result<Vec<Customer>>;
}
