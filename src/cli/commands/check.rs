//! Check command - Ask the engine whether a transition is allowed

use crate::domain::validate_transition;
use crate::errors::{HomyError, Result};

/// Print whether `current -> requested` is allowed.
///
/// A rejected pair is returned as a `StateTransition` error so the process
/// exits with status 2.
pub async fn run(current: &str, requested: &str) -> Result<()> {
    let result = validate_transition(current, requested);
    if result.valid {
        println!("{} -> {}: allowed", current.trim(), requested.trim());
        return Ok(());
    }
    Err(HomyError::StateTransition(
        result.reason.unwrap_or_default(),
    ))
}
