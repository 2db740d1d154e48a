//! Services command - Manage the service catalogue

use serde::Serialize;

use crate::cli::ServicesCommand;
use crate::domain::{active_service_count, average_service_price};
use crate::errors::Result;
use crate::schemas::{Service, ServiceUpdate};

use super::{open_service, print_json, GlobalArgs};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Catalogue<'a> {
    services: Vec<&'a Service>,
    active_services: usize,
    average_price: f64,
}

pub async fn run(args: GlobalArgs<'_>, action: ServicesCommand) -> Result<()> {
    let (_, service) = open_service(args)?;

    match action {
        ServicesCommand::List { active, json } => {
            let services = service.list_services().await?;
            let catalogue = catalogue(&services, active);
            if json {
                return print_json(&catalogue);
            }
            if catalogue.services.is_empty() {
                println!("No services found");
                return Ok(());
            }
            for entry in &catalogue.services {
                println!("{}", service_line(entry));
            }
            println!();
            println!(
                "{} services, {} active, average price {:.0}",
                services.len(),
                catalogue.active_services,
                catalogue.average_price
            );
        }
        ServicesCommand::Add {
            name,
            price,
            description,
            inactive,
        } => {
            let new_service = Service {
                name,
                price,
                description,
                is_active: Some(!inactive),
                ..Service::default()
            };
            let created = service.create_service(new_service).await?;
            println!("Added service {}", service_line(&created));
        }
        ServicesCommand::Update {
            service: key,
            name,
            price,
            description,
        } => {
            let update = ServiceUpdate {
                name,
                price,
                description,
                ..ServiceUpdate::default()
            };
            let updated = service.update_service(&key, &update).await?;
            println!("Updated service {}", service_line(&updated));
        }
        ServicesCommand::Toggle { service: key } => {
            let updated = service.toggle_service(&key).await?;
            let state = if updated.is_active.unwrap_or(true) { "active" } else { "inactive" };
            println!("Service {} is now {}", updated.name, state);
        }
        ServicesCommand::Delete { service: key } => {
            let removed = service.delete_service(&key).await?;
            println!("Deleted service {} ({})", removed.id_string(), removed.name);
        }
    }
    Ok(())
}

/// Figures are computed over the whole catalogue, even when only active entries are listed
fn catalogue(services: &[Service], active_only: bool) -> Catalogue<'_> {
    Catalogue {
        services: services
            .iter()
            .filter(|s| !active_only || s.is_active.unwrap_or(true))
            .collect(),
        active_services: active_service_count(services),
        average_price: average_service_price(services),
    }
}

fn service_line(service: &Service) -> String {
    let id = service.id.as_ref().map(|id| id.to_string()).unwrap_or_else(|| "-".to_string());
    let price = service.price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "-".to_string());
    let state = if service.is_active.unwrap_or(true) { "" } else { " (inactive)" };
    format!("{:<8} {:>10} {}{}", id, price, service.name, state)
}
