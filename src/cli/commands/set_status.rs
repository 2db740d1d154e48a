//! Set-status command - Move a booking to a new status

use chrono::Local;

use crate::domain::StatusUpdateForm;
use crate::errors::{HomyError, Result};
use crate::schemas::{AddedService, Service};
use crate::workflow::{
    add_service, available_services, change_status, PresetCollector, StatusChange, TransitionOutcome,
};

use super::{open_service, refresh_or_cached, GlobalArgs};

/// Flags collected for the status change
#[derive(Debug, Clone, Default)]
pub struct StatusFlags {
    pub notes: Option<String>,
    pub cancel_reason: Option<String>,
    pub total: Option<f64>,
    /// `SERVICE=PRICE` pairs, SERVICE being a catalogue id or name
    pub add_services: Vec<String>,
    pub no_email: bool,
}

/// Change a booking's status, persisting it to the backend
pub async fn run(args: GlobalArgs<'_>, id: &str, status: &str, flags: StatusFlags) -> Result<()> {
    let (config, mut service) = open_service(args)?;
    refresh_or_cached(&mut service).await?;

    let booking = service
        .store()
        .get(id)
        .cloned()
        .ok_or_else(|| HomyError::BookingNotFound(id.to_string()))?;

    let added_services = if flags.add_services.is_empty() {
        Vec::new()
    } else {
        let catalogue = service.list_services().await?;
        build_added_services(&catalogue, Some(&booking.service), &flags.add_services)?
    };

    let form = StatusUpdateForm {
        notes: flags.notes.unwrap_or_default(),
        cancel_reason: flags.cancel_reason.unwrap_or_default(),
        completed_total: flags.total,
        additional_service: !added_services.is_empty(),
        added_services,
    };
    let mut collector = PresetCollector::new(form);

    let change = StatusChange {
        booking: id,
        requested: status,
        send_email: config.send_email && !flags.no_email,
        today: Local::now().date_naive(),
    };

    match change_status(&mut service, &mut collector, &change).await? {
        TransitionOutcome::Applied { booking } => {
            println!("Booking {} is now {}", id, booking.status);
            Ok(())
        }
        TransitionOutcome::Unchanged { status } => {
            println!("Booking {} is already {}", id, status);
            Ok(())
        }
        TransitionOutcome::Dismissed => {
            println!("Status change cancelled");
            Ok(())
        }
        TransitionOutcome::Blocked { reason } => Err(HomyError::StateTransition(reason.to_string())),
        TransitionOutcome::Invalid { reason } => Err(HomyError::StateTransition(reason)),
        TransitionOutcome::Failed { restored, error } => Err(HomyError::wrap(
            error,
            format!("Update failed, booking {} restored to {}", id, restored),
        )),
    }
}

/// Resolve `SERVICE=PRICE` pairs against the catalogue.
fn build_added_services(
    catalogue: &[Service],
    current_service: Option<&str>,
    pairs: &[String],
) -> Result<Vec<AddedService>> {
    let mut added = Vec::new();

    for pair in pairs {
        let (key, price) = pair
            .split_once('=')
            .ok_or_else(|| invalid_pair(pair, "expected SERVICE=PRICE"))?;
        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| invalid_pair(pair, "price is not a number"))?;

        let key = key.trim();
        let service = available_services(catalogue, current_service, &added)
            .into_iter()
            .find(|s| s.matches(key))
            .ok_or_else(|| invalid_pair(pair, "service is not available for this booking"))?;

        let result = add_service(&mut added, service, price);
        if !result.valid {
            return Err(invalid_pair(pair, &result.reason.unwrap_or_default()));
        }
    }
    Ok(added)
}

fn invalid_pair(pair: &str, problem: &str) -> HomyError {
    HomyError::StateTransition(format!("Invalid --add-service {:?}: {}", pair, problem))
}
