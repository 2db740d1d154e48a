//! Validation rules for the auxiliary data a status change carries

use chrono::NaiveDate;

use crate::schemas::{AddedService, BookingStatus, StatusUpdatePayload};

/// Operator-entered data accompanying a status change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdateForm {
    /// Admin notes (required for approval and completion)
    pub notes: String,

    /// Why the booking is cancelled
    pub cancel_reason: String,

    /// Final amount charged on completion
    pub completed_total: Option<f64>,

    /// Whether extra services are being attached on approval
    pub additional_service: bool,

    /// Extra services attached on approval
    pub added_services: Vec<AddedService>,
}

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Whether moving into `requested` needs operator-entered data first
pub fn requires_auxiliary_data(requested: BookingStatus) -> bool {
    !matches!(requested, BookingStatus::Pending)
}

/// Validate entering the "approved" state
pub fn can_enter_approved(notes: &str, additional_service: bool, added: &[AddedService]) -> ValidationResult {
    if notes.trim().is_empty() {
        return ValidationResult::failure("admin notes are required");
    }
    if additional_service && added.is_empty() {
        return ValidationResult::failure("at least one additional service must be added");
    }
    ValidationResult::success()
}

/// Validate entering the "cancelled" state
pub fn can_enter_cancelled(cancel_reason: &str) -> ValidationResult {
    if cancel_reason.trim().is_empty() {
        return ValidationResult::failure("a cancellation reason is required");
    }
    ValidationResult::success()
}

/// Validate entering the "completed" state
pub fn can_enter_completed(notes: &str, completed_total: Option<f64>) -> ValidationResult {
    if notes.trim().is_empty() {
        return ValidationResult::failure("admin notes are required");
    }
    match completed_total {
        Some(total) if total.is_finite() && total > 0.0 => ValidationResult::success(),
        _ => ValidationResult::failure("the completed total must be greater than zero"),
    }
}

/// Validate the form collected for a transition into `requested`
pub fn validate_form(requested: BookingStatus, form: &StatusUpdateForm) -> ValidationResult {
    match requested {
        BookingStatus::Approved => {
            can_enter_approved(&form.notes, form.additional_service, &form.added_services)
        }
        BookingStatus::Cancelled => can_enter_cancelled(&form.cancel_reason),
        BookingStatus::Completed => can_enter_completed(&form.notes, form.completed_total),
        BookingStatus::Pending => ValidationResult::success(),
    }
}

impl StatusUpdateForm {
    /// Merge `{status: requested}` with the auxiliary fields that status carries.
    ///
    /// Fields irrelevant to `requested` are dropped. `today` becomes the
    /// completion date for completed bookings.
    pub fn into_payload(self, requested: BookingStatus, today: NaiveDate) -> StatusUpdatePayload {
        let mut payload = StatusUpdatePayload::status_only(requested);

        match requested {
            BookingStatus::Approved => {
                payload.admin_notes = Some(self.notes.trim().to_string());
                if !self.added_services.is_empty() {
                    if self.additional_service {
                        payload.extra_amount = Some(self.added_services.iter().map(|s| s.price).sum());
                    }
                    payload.added_services = Some(self.added_services);
                }
            }
            BookingStatus::Cancelled => {
                let reason = self.cancel_reason.trim().to_string();
                payload.admin_notes = Some(reason.clone());
                payload.cancel_reason = Some(reason);
            }
            BookingStatus::Completed => {
                payload.total_amount = self.completed_total;
                payload.completion_date = Some(today.format("%Y-%m-%d").to_string());
                payload.admin_notes = Some(self.notes.trim().to_string());
            }
            BookingStatus::Pending => {}
        }

        payload
    }
}
