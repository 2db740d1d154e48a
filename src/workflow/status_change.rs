//! Applying a status change to a booking
//!
//! Decide first, then collect, then update optimistically and persist,
//! reverting the local status if the backend refuses.

use chrono::NaiveDate;

use crate::domain::{
    block_reason, is_transition_allowed, normalize_status, requires_auxiliary_data, validate_form,
    StatusUpdateForm,
};
use crate::errors::{HomyError, Result};
use crate::schemas::{Booking, BookingStatus};
use crate::store::{BookingApi, BookingService};

use super::collector::{CollectRequest, StatusUpdateCollector};

/// How a status change request ended
#[derive(Debug)]
pub enum TransitionOutcome {
    /// The booking already had the requested status
    Unchanged { status: BookingStatus },
    /// The engine rejected the pair; nothing was touched
    Blocked { reason: &'static str },
    /// The operator backed out of data collection
    Dismissed,
    /// Collected data failed validation; nothing was touched
    Invalid { reason: String },
    /// The backend accepted the change
    Applied { booking: Booking },
    /// The backend refused; the local status was put back to `restored`
    Failed { restored: String, error: HomyError },
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransitionOutcome::Applied { .. })
    }

    /// Blocked or invalid: the request itself was at fault
    pub fn is_rejected(&self) -> bool {
        matches!(
            self,
            TransitionOutcome::Blocked { .. } | TransitionOutcome::Invalid { .. }
        )
    }

    /// Message for the operator, if the change did not go through
    pub fn reason(&self) -> Option<String> {
        match self {
            TransitionOutcome::Blocked { reason } => Some(reason.to_string()),
            TransitionOutcome::Invalid { reason } => Some(reason.clone()),
            TransitionOutcome::Failed { error, .. } => Some(error.to_string()),
            TransitionOutcome::Dismissed => Some("Status change cancelled".to_string()),
            TransitionOutcome::Unchanged { .. } | TransitionOutcome::Applied { .. } => None,
        }
    }

    /// The updated booking if the change was applied
    pub fn booking(self) -> Option<Booking> {
        match self {
            TransitionOutcome::Applied { booking } => Some(booking),
            _ => None,
        }
    }
}

/// One status change to apply
#[derive(Debug, Clone)]
pub struct StatusChange<'a> {
    /// Booking id as typed by the operator
    pub booking: &'a str,
    /// Requested status, raw
    pub requested: &'a str,
    /// Ask the backend to email the customer
    pub send_email: bool,
    /// Completion date for completed bookings
    pub today: NaiveDate,
}

/// Run a status change against the local store and the backend.
///
/// Returns `Err` only when the booking is not in the store; every other ending
/// is a [`TransitionOutcome`].
pub async fn change_status<A, C>(
    service: &mut BookingService<A>,
    collector: &mut C,
    change: &StatusChange<'_>,
) -> Result<TransitionOutcome>
where
    A: BookingApi,
    C: StatusUpdateCollector + ?Sized,
{
    let key = change.booking;
    let booking = service
        .store()
        .get(key)
        .cloned()
        .ok_or_else(|| HomyError::BookingNotFound(key.to_string()))?;
    let current_raw = booking.status.clone();

    if !is_transition_allowed(&current_raw, change.requested) {
        let reason = block_reason(&current_raw, change.requested);
        tracing::debug!(
            "Blocked {} -> {} for booking {}: {}",
            current_raw,
            change.requested,
            key,
            reason
        );
        return Ok(TransitionOutcome::Blocked { reason });
    }

    // Both sides parse once the pair is allowed
    let (Some(current), Some(requested)) = (normalize_status(&current_raw), normalize_status(change.requested))
    else {
        return Ok(TransitionOutcome::Blocked {
            reason: block_reason(&current_raw, change.requested),
        });
    };

    if current == requested {
        tracing::debug!("Booking {} is already {}", key, requested);
        return Ok(TransitionOutcome::Unchanged { status: requested });
    }

    let form = if requires_auxiliary_data(requested) {
        let request = CollectRequest {
            booking_id: booking.id.clone().unwrap_or_else(|| key.into()),
            current,
            requested,
            current_service: Some(booking.service.clone()).filter(|s| !s.trim().is_empty()),
        };
        let Some(form) = collector.collect(&request)? else {
            tracing::debug!("Status change for booking {} dismissed", key);
            return Ok(TransitionOutcome::Dismissed);
        };
        let validation = validate_form(requested, &form);
        if !validation.valid {
            let reason = validation
                .reason
                .unwrap_or_else(|| "Invalid status update".to_string());
            tracing::debug!("Rejected form for booking {}: {}", key, reason);
            return Ok(TransitionOutcome::Invalid { reason });
        }
        form
    } else {
        StatusUpdateForm::default()
    };

    let payload = form.into_payload(requested, change.today);
    let id = booking.id.clone().unwrap_or_else(|| key.into());

    let previous = service
        .store_mut()
        .set_status(key, requested)
        .unwrap_or(current_raw);
    tracing::info!("Booking {}: {} -> {}", id, previous, requested);

    match service.persist_status(&id, &payload, change.send_email).await {
        Ok(updated) => Ok(TransitionOutcome::Applied { booking: updated }),
        Err(error) => {
            service.store_mut().restore_status(key, previous.clone());
            service.sync_cache();
            tracing::warn!(
                "Failed to update booking {} to {}, restored {}: {}",
                id,
                requested,
                previous,
                error
            );
            Ok(TransitionOutcome::Failed {
                restored: previous,
                error,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::COMPLETED_LOCKED;
    use crate::fs;
    use crate::schemas::AddedService;
    use crate::store::testing::FakeApi;
    use crate::workflow::PresetCollector;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn change<'a>(booking: &'a str, requested: &'a str) -> StatusChange<'a> {
        StatusChange {
            booking,
            requested,
            send_email: true,
            today: today(),
        }
    }

    fn bookings() -> Vec<Booking> {
        vec![
            Booking::new("Asha Rao", "9876543210", "Sofa Cleaning").with_id(1),
            Booking::new("Ravi Kumar", "9123456780", "Sofa Repair")
                .with_id(2)
                .with_status(BookingStatus::Approved),
            Booking::new("Meera Shah", "9000000001", "Sofa Cleaning")
                .with_id(3)
                .with_status(BookingStatus::Completed),
        ]
    }

    async fn service_with(api: FakeApi) -> BookingService<FakeApi> {
        let mut service = BookingService::new(api);
        service.refresh().await.unwrap();
        service
    }

    fn form(notes: &str) -> StatusUpdateForm {
        StatusUpdateForm {
            notes: notes.to_string(),
            ..StatusUpdateForm::default()
        }
    }

    #[tokio::test]
    async fn test_blocked_transition_makes_no_call() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetNever;

        let outcome = change_status(&mut service, &mut collector, &change("3", "APPROVED"))
            .await
            .unwrap();

        assert!(matches!(outcome, TransitionOutcome::Blocked { reason } if reason == COMPLETED_LOCKED));
        assert_eq!(service.api().calls(), vec!["list"]);
        assert_eq!(service.store().get("3").unwrap().status, "COMPLETED");
    }

    #[tokio::test]
    async fn test_failed_persist_reverts_status() {
        let temp = TempDir::new().unwrap();
        let cache = temp.path().join("bookings.json");
        let mut service = BookingService::new(FakeApi::with_bookings(bookings()).failing()).with_cache(cache.clone());
        service.refresh().await.unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        service.store_mut().subscribe(move |all| {
            let status = all.iter().find(|b| b.has_id("1")).map(|b| b.status.clone());
            sink.lock().unwrap().push(status.unwrap_or_default());
        });

        let mut collector = |_: &CollectRequest| -> Result<Option<StatusUpdateForm>> {
            Ok(Some(StatusUpdateForm {
                cancel_reason: "Customer unreachable".to_string(),
                ..StatusUpdateForm::default()
            }))
        };
        let outcome = change_status(&mut service, &mut collector, &change("1", "cancelled"))
            .await
            .unwrap();

        match outcome {
            TransitionOutcome::Failed { restored, error } => {
                assert_eq!(restored, "PENDING");
                assert_eq!(error.code(), "API_ERROR");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        let booking = service.store().get("1").unwrap();
        assert_eq!(booking.status, "PENDING");
        assert!(booking.admin_notes.is_none());
        assert_eq!(*seen.lock().unwrap(), vec!["CANCELLED", "PENDING"]);

        let cached = fs::read_bookings_cache(&cache).unwrap();
        assert_eq!(cached[0].status, "PENDING");
    }

    #[tokio::test]
    async fn test_approve_sends_merged_payload() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetCollector::new(StatusUpdateForm {
            notes: " Confirmed ".to_string(),
            additional_service: true,
            added_services: vec![AddedService {
                id: "s2".to_string(),
                name: "Sofa Repair".to_string(),
                price: 400.0,
            }],
            ..StatusUpdateForm::default()
        });

        let outcome = change_status(&mut service, &mut collector, &change("1", "APPROVED"))
            .await
            .unwrap();

        assert!(outcome.is_applied());
        assert_eq!(service.store().get("1").unwrap().status(), Some(BookingStatus::Approved));
        let payloads = service.api().payloads.lock().unwrap().clone();
        assert_eq!(payloads.len(), 1);
        let (payload, send_email) = &payloads[0];
        assert!(*send_email);
        assert_eq!(payload.admin_notes.as_deref(), Some("Confirmed"));
        assert_eq!(payload.extra_amount, Some(400.0));
    }

    #[tokio::test]
    async fn test_complete_sets_completion_date() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetCollector::new(StatusUpdateForm {
            completed_total: Some(1499.0),
            ..form("Done")
        });

        let mut request = change("2", "COMPLETED");
        request.send_email = false;
        let booking = change_status(&mut service, &mut collector, &request)
            .await
            .unwrap()
            .booking()
            .unwrap();

        assert_eq!(booking.total_amount, Some(1499.0));
        let payloads = service.api().payloads.lock().unwrap().clone();
        assert_eq!(payloads[0].0.completion_date.as_deref(), Some("2024-06-15"));
        assert!(!payloads[0].1);
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetCollector::new(form("  "));

        let outcome = change_status(&mut service, &mut collector, &change("1", "APPROVED"))
            .await
            .unwrap();

        assert!(outcome.is_rejected());
        assert!(matches!(outcome, TransitionOutcome::Invalid { .. }));
        assert_eq!(service.api().calls(), vec!["list"]);
        assert_eq!(service.store().get("1").unwrap().status, "PENDING");
    }

    #[tokio::test]
    async fn test_dismissed_collection() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetCollector::dismissing();

        let outcome = change_status(&mut service, &mut collector, &change("2", "COMPLETED"))
            .await
            .unwrap();

        assert!(matches!(outcome, TransitionOutcome::Dismissed));
        assert_eq!(service.api().calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_same_status_is_unchanged() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let mut collector = PresetNever;

        let outcome = change_status(&mut service, &mut collector, &change("1", " pending "))
            .await
            .unwrap();

        assert!(matches!(outcome, TransitionOutcome::Unchanged { status: BookingStatus::Pending }));
        assert_eq!(service.api().calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_unknown_booking() {
        let mut service = service_with(FakeApi::with_bookings(bookings())).await;
        let err = change_status(&mut service, &mut PresetNever, &change("42", "APPROVED"))
            .await
            .unwrap_err();
        assert!(matches!(err, HomyError::BookingNotFound(id) if id == "42"));
    }

    /// Fails the test if asked to collect anything
    struct PresetNever;

    impl StatusUpdateCollector for PresetNever {
        fn collect(&mut self, request: &CollectRequest) -> Result<Option<StatusUpdateForm>> {
            panic!("unexpected collection for {:?}", request);
        }
    }
}
