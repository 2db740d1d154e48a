//! Delete command - Remove a booking from the backend

use crate::errors::Result;

use super::{open_service, refresh_or_cached, GlobalArgs};

pub async fn run(args: GlobalArgs<'_>, id: &str) -> Result<()> {
    let (_, mut service) = open_service(args)?;
    refresh_or_cached(&mut service).await?;

    let removed = service.delete_booking(id).await?;
    println!("Deleted booking {} ({})", id, removed.name);
    Ok(())
}
