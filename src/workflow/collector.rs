//! Gathering the extra data a status change carries

use crate::domain::{StatusUpdateForm, ValidationResult};
use crate::errors::Result;
use crate::schemas::{AddedService, BookingId, BookingStatus, Service};

/// What a collector is asked to fill in
#[derive(Debug, Clone, PartialEq)]
pub struct CollectRequest {
    pub booking_id: BookingId,
    pub current: BookingStatus,
    pub requested: BookingStatus,
    /// The booking's own service, hidden from add-on choices
    pub current_service: Option<String>,
}

/// Source of auxiliary status-change data (an operator dialog, CLI flags, ...).
///
/// `Ok(None)` means the operator backed out.
pub trait StatusUpdateCollector {
    fn collect(&mut self, request: &CollectRequest) -> Result<Option<StatusUpdateForm>>;
}

impl<F> StatusUpdateCollector for F
where
    F: FnMut(&CollectRequest) -> Result<Option<StatusUpdateForm>>,
{
    fn collect(&mut self, request: &CollectRequest) -> Result<Option<StatusUpdateForm>> {
        self(request)
    }
}

/// Collector that answers with a form prepared up front
#[derive(Debug, Clone, Default)]
pub struct PresetCollector {
    form: Option<StatusUpdateForm>,
}

impl PresetCollector {
    pub fn new(form: StatusUpdateForm) -> Self {
        PresetCollector { form: Some(form) }
    }

    /// A collector that always backs out
    pub fn dismissing() -> Self {
        PresetCollector { form: None }
    }
}

impl StatusUpdateCollector for PresetCollector {
    fn collect(&mut self, request: &CollectRequest) -> Result<Option<StatusUpdateForm>> {
        tracing::debug!(
            "Using preset form for booking {} ({} -> {})",
            request.booking_id,
            request.current,
            request.requested
        );
        Ok(self.form.clone())
    }
}

/// Add a catalogue service to the list at the given price.
///
/// The price must be positive and a service can only be added once.
pub fn add_service(added: &mut Vec<AddedService>, service: &Service, price: f64) -> ValidationResult {
    if !price.is_finite() || price <= 0.0 {
        return ValidationResult::failure("Please select a service and enter a valid price");
    }
    let id = service.id_string();
    if added.iter().any(|s| s.id == id) {
        return ValidationResult::failure("This service has already been added");
    }
    added.push(AddedService {
        id,
        name: service.name.clone(),
        price,
    });
    ValidationResult::success()
}

/// Remove an added service by id.
pub fn remove_service(added: &mut Vec<AddedService>, id: &str) -> bool {
    let before = added.len();
    added.retain(|s| s.id != id);
    added.len() != before
}

/// Catalogue entries still offerable as add-ons.
///
/// Hides the booking's own service and anything already added, comparing names
/// case-insensitively. Without a current service the whole catalogue is offered.
pub fn available_services<'a>(
    catalogue: &'a [Service],
    current_service: Option<&str>,
    added: &[AddedService],
) -> Vec<&'a Service> {
    let Some(current) = current_service.map(str::trim).filter(|s| !s.is_empty()) else {
        return catalogue.iter().collect();
    };
    let current = current.to_lowercase();

    catalogue
        .iter()
        .filter(|service| {
            let name = service.name.trim().to_lowercase();
            name != current && !added.iter().any(|a| a.name.trim().to_lowercase() == name)
        })
        .collect()
}
