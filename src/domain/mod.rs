//! Domain logic for booking statuses and transitions

mod catalogue;
mod normalize;
mod states;
mod stats;
mod transitions;
mod validation;


pub use catalogue::{
    active_service_count, average_service_price, search_customers, total_customer_bookings,
    validate_new_service, validate_service_update,
};
pub use normalize::{normalize_booking, normalize_date, parse_booking_date, parse_dmy_date};
pub use states::{allowed_targets, is_terminal_state, normalize_status, BOOKING_STATUSES};
pub use stats::{compute_stats, monthly_revenue, recent_bookings, todays_bookings};
pub use transitions::{
    block_reason, can_transition, is_transition_allowed, presentable_options, validate_transition,
    APPROVED_ONLY, CANCELLED_LOCKED, COMPLETED_LOCKED, INVALID_TRANSITION, PENDING_ONLY,
};
pub use validation::{
    can_enter_approved, can_enter_cancelled, can_enter_completed, requires_auxiliary_data,
    validate_form, StatusUpdateForm, ValidationResult,
};
