//! CLI module for homy
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Homy - Booking administration for the Homy sofa services backend
#[derive(Parser, Debug)]
#[command(name = "homy")]
#[command(version)]
#[command(about = "Booking administration for the Homy sofa services backend")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List bookings with optional filtering
    List {
        /// Filter by status (pending, approved, completed, cancelled)
        #[arg(long)]
        status: Option<String>,

        /// Match name, phone, email or service
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a specific booking
    Show {
        /// Booking ID
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a status transition is allowed
    Check {
        /// Current status
        current: String,

        /// Requested status
        requested: String,
    },

    /// List the statuses an operator may pick from a given status
    Options {
        /// Current status
        status: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the status of a booking
    SetStatus {
        /// Booking ID
        id: String,

        /// Requested status
        status: String,

        /// Admin notes (required for approved and completed)
        #[arg(long)]
        notes: Option<String>,

        /// Cancellation reason (required for cancelled)
        #[arg(long)]
        cancel_reason: Option<String>,

        /// Final amount charged (required for completed)
        #[arg(long)]
        total: Option<f64>,

        /// Add a catalogue service at a price, as SERVICE=PRICE (repeatable)
        #[arg(long = "add-service", value_name = "SERVICE=PRICE")]
        add_service: Vec<String>,

        /// Do not email the customer about the change
        #[arg(long)]
        no_email: bool,
    },

    /// Delete a booking
    Delete {
        /// Booking ID
        id: String,
    },

    /// Show dashboard statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the service catalogue
    Services {
        #[command(subcommand)]
        action: ServicesCommand,
    },

    /// List customers with their booking counts
    Customers {
        /// Match name, email or phone
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ServicesCommand {
    /// List catalogue services
    List {
        /// Only show active services
        #[arg(long)]
        active: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a service to the catalogue
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        description: Option<String>,

        /// Create the service switched off
        #[arg(long)]
        inactive: bool,
    },

    /// Change a service's name, price or description
    Update {
        /// Service id or name
        service: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Switch a service between active and inactive
    Toggle {
        /// Service id or name
        service: String,
    },

    /// Remove a service from the catalogue
    Delete {
        /// Service id or name
        service: String,
    },
}
