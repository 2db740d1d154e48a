//! Homy CLI - Booking administration for the Homy sofa services backend

use clap::Parser;
use homy::cli::commands::{self, set_status::StatusFlags, GlobalArgs};
use homy::cli::{Cli, Commands};
use homy::errors::{to_exit_code, HomyError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = tokio::select! {
        result = run(cli) => result,
        _ = tokio::signal::ctrl_c() => Err(HomyError::Interrupted),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> homy::Result<()> {
    let args = GlobalArgs {
        cwd: cli.cwd.as_deref(),
        api_url: cli.api_url.as_deref(),
    };

    match cli.command {
        Some(Commands::List { status, search, json }) => {
            commands::list::run(args, json, status.as_deref(), search.as_deref()).await
        }
        Some(Commands::Show { id, json }) => commands::show::run(args, &id, json).await,
        Some(Commands::Check { current, requested }) => {
            commands::check::run(&current, &requested).await
        }
        Some(Commands::Options { status, json }) => commands::options::run(&status, json).await,
        Some(Commands::SetStatus {
            id,
            status,
            notes,
            cancel_reason,
            total,
            add_service,
            no_email,
        }) => {
            let flags = StatusFlags {
                notes,
                cancel_reason,
                total,
                add_services: add_service,
                no_email,
            };
            commands::set_status::run(args, &id, &status, flags).await
        }
        Some(Commands::Delete { id }) => commands::delete::run(args, &id).await,
        Some(Commands::Stats { json }) => commands::stats::run(args, json).await,
        Some(Commands::Services { action }) => commands::services::run(args, action).await,
        Some(Commands::Customers { search, json }) => {
            commands::customers::run(args, json, search.as_deref()).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
