//! Keeps the local store, the backend and the cache file in step

use std::path::PathBuf;

use crate::errors::{HomyError, Result};
use crate::fs;
use crate::domain::{validate_new_service, validate_service_update, ValidationResult};
use crate::schemas::{Booking, BookingId, Customer, Service, ServiceUpdate, StatusUpdatePayload};

use super::api::BookingApi;
use super::booking_store::BookingStore;

/// Booking API plus the local state it feeds.
#[derive(Debug)]
pub struct BookingService<A> {
    api: A,
    store: BookingStore,
    cache_path: Option<PathBuf>,
}

impl<A: BookingApi> BookingService<A> {
    pub fn new(api: A) -> Self {
        BookingService {
            api,
            store: BookingStore::new(),
            cache_path: None,
        }
    }

    /// Mirror the store to a cache file after every successful write.
    pub fn with_cache(mut self, path: PathBuf) -> Self {
        self.cache_path = Some(path);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BookingStore {
        &mut self.store
    }

    /// Seed the store from the cache file. Returns the number of bookings loaded.
    pub fn load_cache(&mut self) -> Result<usize> {
        let Some(path) = &self.cache_path else {
            return Ok(0);
        };
        let bookings = fs::read_bookings_cache(path)?;
        let count = bookings.len();
        self.store.replace_all(bookings);
        tracing::debug!("Loaded {} cached bookings from {}", count, path.display());
        Ok(count)
    }

    pub fn save_cache(&self) -> Result<()> {
        match &self.cache_path {
            Some(path) => fs::write_bookings_cache(path, self.store.bookings()),
            None => Ok(()),
        }
    }

    /// Cache writes never fail the operation that triggered them.
    pub(crate) fn sync_cache(&self) {
        if let Err(e) = self.save_cache() {
            tracing::warn!("Failed to write booking cache: {}", e);
        }
    }

    /// Replace local state with the backend's booking list.
    pub async fn refresh(&mut self) -> Result<usize> {
        let bookings = self.api.list_bookings().await?;
        let count = bookings.len();
        self.store.replace_all(bookings);
        self.sync_cache();
        tracing::info!("Fetched {} bookings", count);
        Ok(count)
    }

    /// Fetch one booking from the backend and merge it into the store.
    pub async fn fetch_booking(&mut self, key: &str) -> Result<Booking> {
        let booking = self.api.get_booking(&BookingId::from(key)).await?;
        self.store.upsert(booking);
        self.sync_cache();
        self.store
            .get(key)
            .cloned()
            .ok_or_else(|| HomyError::BookingNotFound(key.to_string()))
    }

    /// Send a status update and merge the backend's record into the store.
    pub async fn persist_status(
        &mut self,
        id: &BookingId,
        payload: &StatusUpdatePayload,
        send_email: bool,
    ) -> Result<Booking> {
        let updated = self.api.update_booking_status(id, payload, send_email).await?;
        let mut updated = crate::domain::normalize_booking(updated);
        if updated.id.is_none() {
            updated.id = Some(id.clone());
        }
        self.store.upsert(updated.clone());
        self.sync_cache();
        Ok(updated)
    }

    pub async fn delete_booking(&mut self, key: &str) -> Result<Booking> {
        let booking = self
            .store
            .get(key)
            .cloned()
            .ok_or_else(|| HomyError::BookingNotFound(key.to_string()))?;
        let id = booking.id.clone().unwrap_or_else(|| BookingId::from(key));
        self.api.delete_booking(&id).await?;
        self.store.remove(key);
        self.sync_cache();
        tracing::info!("Deleted booking {}", id);
        Ok(booking)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        self.api.list_services().await
    }

    /// Look a catalogue service up by id or name.
    pub async fn find_service(&self, key: &str) -> Result<Service> {
        self.api
            .list_services()
            .await?
            .into_iter()
            .find(|s| s.matches(key))
            .ok_or_else(|| HomyError::ServiceNotFound(key.to_string()))
    }

    /// Add a catalogue entry. New services are active unless stated otherwise.
    pub async fn create_service(&self, mut service: Service) -> Result<Service> {
        check(validate_new_service(&service))?;
        service.is_active.get_or_insert(true);
        let created = self.api.create_service(&service).await?;
        tracing::info!("Created service {} ({})", created.name, created.id_string());
        Ok(created)
    }

    pub async fn update_service(&self, key: &str, update: &ServiceUpdate) -> Result<Service> {
        check(validate_service_update(update))?;
        let existing = self.find_service(key).await?;
        let id = existing.id.ok_or_else(|| HomyError::ServiceNotFound(key.to_string()))?;
        let updated = self.api.update_service(&id, update).await?;
        tracing::info!("Updated service {}", id);
        Ok(updated)
    }

    /// Flip a service's active flag; a service without one counts as active.
    pub async fn toggle_service(&self, key: &str) -> Result<Service> {
        let existing = self.find_service(key).await?;
        let update = ServiceUpdate {
            is_active: Some(!existing.is_active.unwrap_or(true)),
            ..ServiceUpdate::default()
        };
        self.update_service(&existing.id_string(), &update).await
    }

    pub async fn delete_service(&self, key: &str) -> Result<Service> {
        let existing = self.find_service(key).await?;
        let id = existing
            .id
            .clone()
            .ok_or_else(|| HomyError::ServiceNotFound(key.to_string()))?;
        self.api.delete_service(&id).await?;
        tracing::info!("Deleted service {}", id);
        Ok(existing)
    }

    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        let customers = self.api.list_customers().await?;
        tracing::debug!("Fetched {} customers", customers.len());
        Ok(customers)
    }
}

fn check(result: ValidationResult) -> Result<()> {
    if result.valid {
        return Ok(());
    }
    Err(HomyError::InvalidInput(result.reason.unwrap_or_default()))
}
