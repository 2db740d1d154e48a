//! Status transition rules
//!
//! Pure functions deciding whether a booking may move from one status to
//! another. Inputs are raw strings as they arrive from the backend or an
//! operator; anything that is not a known status is rejected.

use std::collections::BTreeSet;

use crate::schemas::BookingStatus;

use super::states::{allowed_targets, normalize_status};
use super::validation::ValidationResult;

pub const COMPLETED_LOCKED: &str = "Completed bookings cannot change status";
pub const CANCELLED_LOCKED: &str = "Cancelled bookings cannot change status";
pub const PENDING_ONLY: &str = "Pending bookings can only be approved or cancelled";
pub const APPROVED_ONLY: &str = "Approved bookings can only be marked as completed";
pub const INVALID_TRANSITION: &str = "Invalid status transition";

/// Typed transition check.
///
/// Same-status requests are always allowed; otherwise the target must be a
/// forward edge of the adjacency table.
pub fn can_transition(current: BookingStatus, requested: BookingStatus) -> bool {
    current == requested || allowed_targets(current).contains(&requested)
}

/// Decide whether a transition between two raw status strings is legal.
///
/// Both sides are normalized case-insensitively. Unknown statuses on either
/// side reject the transition.
pub fn is_transition_allowed(current: &str, requested: &str) -> bool {
    match (normalize_status(current), normalize_status(requested)) {
        (Some(current), Some(requested)) => can_transition(current, requested),
        _ => false,
    }
}

/// Human-readable reason a transition is refused.
///
/// Meant for pairs rejected by [`is_transition_allowed`]; an allowed pair or an
/// unknown current status yields the generic reason.
pub fn block_reason(current: &str, requested: &str) -> &'static str {
    if is_transition_allowed(current, requested) {
        return INVALID_TRANSITION;
    }

    let requested = normalize_status(requested);
    match normalize_status(current) {
        Some(BookingStatus::Completed) => COMPLETED_LOCKED,
        Some(BookingStatus::Cancelled) => CANCELLED_LOCKED,
        Some(BookingStatus::Pending)
            if !matches!(
                requested,
                Some(BookingStatus::Approved) | Some(BookingStatus::Cancelled)
            ) =>
        {
            PENDING_ONLY
        }
        Some(BookingStatus::Approved) if requested != Some(BookingStatus::Completed) => {
            APPROVED_ONLY
        }
        _ => INVALID_TRANSITION,
    }
}

/// Statuses an operator should be offered for a booking in `current`.
///
/// Always contains `current` itself plus its forward transitions. An unknown
/// current status offers nothing.
pub fn presentable_options(current: &str) -> BTreeSet<BookingStatus> {
    match normalize_status(current) {
        Some(status) => std::iter::once(status)
            .chain(allowed_targets(status).iter().copied())
            .collect(),
        None => BTreeSet::new(),
    }
}

/// Validate a transition, bundling the decision and its reason.
pub fn validate_transition(current: &str, requested: &str) -> ValidationResult {
    if is_transition_allowed(current, requested) {
        ValidationResult::success()
    } else {
        ValidationResult::failure(block_reason(current, requested))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::states::BOOKING_STATUSES;

    fn set(statuses: &[BookingStatus]) -> BTreeSet<BookingStatus> {
        statuses.iter().copied().collect()
    }

    #[test]
    fn test_same_status_is_always_allowed() {
        for status in BOOKING_STATUSES {
            assert!(is_transition_allowed(status.as_str(), status.as_str()));
        }
    }

    #[test]
    fn test_terminal_states_are_locked() {
        for terminal in [BookingStatus::Completed, BookingStatus::Cancelled] {
            for requested in BOOKING_STATUSES {
                if *requested != terminal {
                    assert!(!is_transition_allowed(terminal.as_str(), requested.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_pending_edges() {
        assert!(is_transition_allowed("PENDING", "APPROVED"));
        assert!(is_transition_allowed("PENDING", "CANCELLED"));
        assert!(!is_transition_allowed("PENDING", "COMPLETED"));
    }

    #[test]
    fn test_approved_edges() {
        assert!(is_transition_allowed("APPROVED", "COMPLETED"));
        assert!(!is_transition_allowed("APPROVED", "CANCELLED"));
        assert!(!is_transition_allowed("APPROVED", "PENDING"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            is_transition_allowed("pending", "Approved"),
            is_transition_allowed("PENDING", "APPROVED")
        );
        assert!(is_transition_allowed(" approved ", "completed"));
    }

    #[test]
    fn test_unknown_statuses_are_rejected() {
        assert!(!is_transition_allowed("ON_HOLD", "APPROVED"));
        assert!(!is_transition_allowed("PENDING", "SHIPPED"));
        assert!(!is_transition_allowed("", ""));
        assert!(!is_transition_allowed("CONFIRMED", "CONFIRMED"));
    }

    #[test]
    fn test_block_reasons() {
        assert_eq!(block_reason("COMPLETED", "APPROVED"), COMPLETED_LOCKED);
        assert_eq!(block_reason("completed", "pending"), COMPLETED_LOCKED);
        assert_eq!(block_reason("CANCELLED", "PENDING"), CANCELLED_LOCKED);
        assert_eq!(block_reason("PENDING", "COMPLETED"), PENDING_ONLY);
        assert_eq!(block_reason("PENDING", "SHIPPED"), PENDING_ONLY);
        assert_eq!(block_reason("APPROVED", "CANCELLED"), APPROVED_ONLY);
        assert_eq!(block_reason("APPROVED", "PENDING"), APPROVED_ONLY);
    }

    #[test]
    fn test_block_reason_fallback() {
        assert_eq!(block_reason("ON_HOLD", "APPROVED"), INVALID_TRANSITION);
        // Misuse on an allowed pair stays safe
        assert_eq!(block_reason("PENDING", "APPROVED"), INVALID_TRANSITION);
        assert_eq!(block_reason("COMPLETED", "COMPLETED"), INVALID_TRANSITION);
    }

    #[test]
    fn test_presentable_options() {
        assert_eq!(presentable_options("COMPLETED"), set(&[BookingStatus::Completed]));
        assert_eq!(presentable_options("CANCELLED"), set(&[BookingStatus::Cancelled]));
        assert_eq!(
            presentable_options("PENDING"),
            set(&[
                BookingStatus::Pending,
                BookingStatus::Approved,
                BookingStatus::Cancelled
            ])
        );
        assert_eq!(
            presentable_options("approved"),
            set(&[BookingStatus::Approved, BookingStatus::Completed])
        );
        assert!(presentable_options("ARCHIVED").is_empty());
    }

    #[test]
    fn test_validate_transition() {
        let ok = validate_transition("PENDING", "CANCELLED");
        assert!(ok.valid);
        assert!(ok.reason.is_none());

        let blocked = validate_transition("COMPLETED", "APPROVED");
        assert!(!blocked.valid);
        assert_eq!(blocked.reason.as_deref(), Some(COMPLETED_LOCKED));
    }

    #[test]
    fn test_can_transition_matches_string_form() {
        for current in BOOKING_STATUSES {
            for requested in BOOKING_STATUSES {
                assert_eq!(
                    can_transition(*current, *requested),
                    is_transition_allowed(current.as_str(), requested.as_str())
                );
            }
        }
    }
}
