//! In-memory `BookingApi` used by unit tests

use std::sync::Mutex;

use crate::errors::{HomyError, Result};
use crate::schemas::{
    Booking, BookingId, BookingStatus, Customer, Service, ServiceId, ServiceUpdate, StatusUpdatePayload,
};

use super::api::BookingApi;

#[derive(Default)]
pub(crate) struct FakeApi {
    pub bookings: Vec<Booking>,
    pub services: Vec<Service>,
    pub customers: Vec<Customer>,
    pub fail_updates: bool,
    pub calls: Mutex<Vec<String>>,
    pub payloads: Mutex<Vec<(StatusUpdatePayload, bool)>>,
}

impl FakeApi {
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        FakeApi {
            bookings,
            ..Self::default()
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn find_service(&self, id: &ServiceId) -> Result<Service> {
        self.services
            .iter()
            .find(|s| s.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| HomyError::ServiceNotFound(id.to_string()))
    }

    fn find(&self, id: &BookingId) -> Result<Booking> {
        self.bookings
            .iter()
            .find(|b| b.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| HomyError::BookingNotFound(id.to_string()))
    }
}

impl BookingApi for FakeApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.record("list".to_string());
        Ok(self.bookings.clone())
    }

    async fn get_booking(&self, id: &BookingId) -> Result<Booking> {
        self.record(format!("get {}", id));
        self.find(id)
    }

    async fn update_booking_status(
        &self,
        id: &BookingId,
        payload: &StatusUpdatePayload,
        send_email: bool,
    ) -> Result<Booking> {
        self.record(format!("update {} {}", id, payload.status));
        self.payloads.lock().unwrap().push((payload.clone(), send_email));
        if self.fail_updates {
            return Err(HomyError::Api {
                status: 500,
                message: "backend unavailable".to_string(),
            });
        }
        let mut booking = self.find(id)?;
        booking.status = payload.status.to_string();
        if payload.status == BookingStatus::Completed {
            booking.total_amount = payload.total_amount;
        }
        if payload.admin_notes.is_some() {
            booking.admin_notes = payload.admin_notes.clone();
        }
        Ok(booking)
    }

    async fn delete_booking(&self, id: &BookingId) -> Result<()> {
        self.record(format!("delete {}", id));
        self.find(id).map(|_| ())
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        self.record("services".to_string());
        Ok(self.services.clone())
    }

    async fn create_service(&self, service: &Service) -> Result<Service> {
        self.record(format!("create service {}", service.name));
        let next = self.services.len() as i64 + 1;
        Ok(Service {
            id: Some(ServiceId::Number(next)),
            ..service.clone()
        })
    }

    async fn update_service(&self, id: &ServiceId, update: &ServiceUpdate) -> Result<Service> {
        self.record(format!("update service {}", id));
        let mut service = self.find_service(id)?;
        if let Some(name) = &update.name {
            service.name = name.clone();
        }
        if update.description.is_some() {
            service.description = update.description.clone();
        }
        if update.price.is_some() {
            service.price = update.price;
        }
        if update.is_active.is_some() {
            service.is_active = update.is_active;
        }
        Ok(service)
    }

    async fn delete_service(&self, id: &ServiceId) -> Result<()> {
        self.record(format!("delete service {}", id));
        self.find_service(id).map(|_| ())
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.record("customers".to_string());
        Ok(self.customers.clone())
    }
}
