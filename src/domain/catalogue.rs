//! Service catalogue and customer listing figures

use crate::schemas::{Customer, Service, ServiceUpdate};

use super::validation::ValidationResult;

/// Services flagged active; a missing flag does not count
pub fn active_service_count(services: &[Service]) -> usize {
    services.iter().filter(|s| s.is_active == Some(true)).count()
}

/// Mean catalogue price, rounded to whole rupees.
///
/// Services without a price count as zero. An empty catalogue averages zero.
pub fn average_service_price(services: &[Service]) -> f64 {
    if services.is_empty() {
        return 0.0;
    }
    let total: f64 = services.iter().map(|s| s.price.unwrap_or(0.0)).sum();
    (total / services.len() as f64).round()
}

/// A new catalogue entry needs a name and, if priced, a non-negative finite price.
pub fn validate_new_service(service: &Service) -> ValidationResult {
    if service.name.trim().is_empty() {
        return ValidationResult::failure("A service name is required");
    }
    check_price(service.price)
}

pub fn validate_service_update(update: &ServiceUpdate) -> ValidationResult {
    if update.is_empty() {
        return ValidationResult::failure("Nothing to update");
    }
    if update.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return ValidationResult::failure("A service name is required");
    }
    check_price(update.price)
}

fn check_price(price: Option<f64>) -> ValidationResult {
    match price {
        Some(p) if !p.is_finite() || p < 0.0 => {
            ValidationResult::failure("The price must be a non-negative number")
        }
        _ => ValidationResult::success(),
    }
}

/// Sum of every listed customer's booking count
pub fn total_customer_bookings(customers: &[Customer]) -> u64 {
    customers.iter().map(|c| c.total_bookings.unwrap_or(0)).sum()
}

/// Customers whose name, email or phone contains `query`, ignoring case.
pub fn search_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return customers.iter().collect();
    }
    customers
        .iter()
        .filter(|c| {
            [&c.name, &c.email, &c.phone]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        })
        .collect()
}
