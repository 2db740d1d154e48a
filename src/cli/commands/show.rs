//! Show command - Show details of a specific booking

use crate::domain::presentable_options;
use crate::errors::{HomyError, Result};
use crate::schemas::Booking;

use super::{open_service, print_json, GlobalArgs};

/// Show details of a specific booking
pub async fn run(args: GlobalArgs<'_>, id: &str, json: bool) -> Result<()> {
    let (_, mut service) = open_service(args)?;

    let booking = match service.fetch_booking(id).await {
        Ok(booking) => booking,
        Err(HomyError::BookingNotFound(_)) => return Err(HomyError::BookingNotFound(id.to_string())),
        Err(e) => {
            tracing::warn!("Backend unavailable, using cached booking: {}", e);
            service
                .store()
                .get(id)
                .cloned()
                .ok_or_else(|| HomyError::BookingNotFound(id.to_string()))?
        }
    };

    if json {
        return print_json(&booking);
    }
    for line in describe(&booking) {
        println!("{}", line);
    }
    Ok(())
}

fn describe(booking: &Booking) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Booking {}",
            booking.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
        ),
        format!("  Status:   {}", booking.status),
        format!("  Customer: {} ({})", booking.name, booking.phone),
    ];
    if !booking.email.is_empty() {
        lines.push(format!("  Email:    {}", booking.email));
    }
    lines.push(format!("  Service:  {}", booking.service));
    if !booking.date.is_empty() {
        lines.push(format!("  Date:     {}", booking.date));
    }
    if let Some(slot) = &booking.time_slot {
        lines.push(format!("  Slot:     {}", slot));
    }
    if let Some(address) = &booking.address {
        lines.push(format!("  Address:  {}", address));
    }
    if booking.amount() > 0.0 {
        lines.push(format!("  Amount:   {:.2}", booking.amount()));
    }
    if let Some(notes) = &booking.admin_notes {
        lines.push(format!("  Notes:    {}", notes));
    }

    let options: Vec<&str> = presentable_options(&booking.status)
        .into_iter()
        .filter(|s| booking.status() != Some(*s))
        .map(|s| s.as_str())
        .collect();
    if options.is_empty() {
        lines.push("  No further status changes".to_string());
    } else {
        lines.push(format!("  Can move to: {}", options.join(", ")));
    }
    lines
}
