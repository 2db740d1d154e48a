//! Status change orchestration

mod collector;
mod status_change;

pub use collector::{
    add_service, available_services, remove_service, CollectRequest, PresetCollector,
    StatusUpdateCollector,
};
pub use status_change::{change_status, StatusChange, TransitionOutcome};
