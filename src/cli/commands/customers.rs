//! Customers command - List customers known to the backend

use crate::domain::{search_customers, total_customer_bookings};
use crate::errors::Result;
use crate::schemas::Customer;

use super::{open_service, print_json, GlobalArgs};

pub async fn run(args: GlobalArgs<'_>, json: bool, search: Option<&str>) -> Result<()> {
    let (_, service) = open_service(args)?;
    let customers = service.list_customers().await?;
    let matched = search_customers(&customers, search.unwrap_or_default());

    if json {
        return print_json(&matched);
    }

    if matched.is_empty() {
        println!("No customers found");
        return Ok(());
    }
    for customer in &matched {
        println!("{}", customer_line(customer));
    }
    println!();
    println!(
        "{} customers, {} bookings",
        customers.len(),
        total_customer_bookings(&customers)
    );
    Ok(())
}

fn customer_line(customer: &Customer) -> String {
    let contact = if customer.email.is_empty() {
        customer.phone.clone()
    } else {
        format!("{}, {}", customer.phone, customer.email)
    };
    format!(
        "{:<24} {:<36} {} bookings",
        customer.name,
        contact.trim_start_matches(", "),
        customer.total_bookings.unwrap_or(0)
    )
}
