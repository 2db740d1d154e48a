//! Stats command - Dashboard figures over all bookings

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::domain::{compute_stats, monthly_revenue, recent_bookings, todays_bookings};
use crate::errors::Result;
use crate::schemas::{Booking, BookingStats};

use super::{booking_line, open_service, print_json, refresh_or_cached, GlobalArgs};

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    #[serde(flatten)]
    stats: BookingStats,
    monthly_revenue: f64,
    todays_bookings: usize,
    recent_bookings: Vec<Booking>,
}

fn dashboard(bookings: &[Booking], today: NaiveDate) -> Dashboard {
    Dashboard {
        stats: compute_stats(bookings),
        monthly_revenue: monthly_revenue(bookings, today.year(), today.month()),
        todays_bookings: todays_bookings(bookings, today),
        recent_bookings: recent_bookings(bookings, RECENT_LIMIT).into_iter().cloned().collect(),
    }
}

pub async fn run(args: GlobalArgs<'_>, json: bool) -> Result<()> {
    let (_, mut service) = open_service(args)?;
    refresh_or_cached(&mut service).await?;

    let dashboard = dashboard(service.store().bookings(), Local::now().date_naive());
    if json {
        return print_json(&dashboard);
    }

    let stats = &dashboard.stats;
    println!("Total bookings:   {}", stats.total_bookings);
    println!("  Pending:        {}", stats.pending_bookings);
    println!("  Approved:       {}", stats.approved_bookings);
    println!("  Completed:      {}", stats.completed_bookings);
    println!("  Cancelled:      {}", stats.cancelled_bookings);
    println!("Customers:        {}", stats.total_customers);
    println!("Today's bookings: {}", dashboard.todays_bookings);
    println!("Total revenue:    {:.2}", stats.total_revenue);
    println!("This month:       {:.2}", dashboard.monthly_revenue);
    println!("Average value:    {:.2}", stats.average_value);

    if !dashboard.recent_bookings.is_empty() {
        println!();
        println!("Recent bookings:");
        for booking in &dashboard.recent_bookings {
            println!("  {}", booking_line(booking));
        }
    }
    Ok(())
}
