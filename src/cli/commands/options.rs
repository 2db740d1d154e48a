//! Options command - Statuses an operator may pick for a booking

use crate::domain::presentable_options;
use crate::errors::Result;

pub async fn run(status: &str, json: bool) -> Result<()> {
    let options = presentable_options(status);

    if json {
        return super::print_json(&options);
    }
    if options.is_empty() {
        println!("No status changes available from {}", status.trim());
        return Ok(());
    }
    for option in options {
        println!("{}", option);
    }
    Ok(())
}
