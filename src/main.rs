//! Contact Book - Main entry point
//!
//! Runs the interactive menu on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::cli::Session;
use contact_book::{AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep the menu on stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with file: {}",
        config.contacts_file.display()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(AddressBook::new(), config, stdin.lock(), stdout.lock());

    session.load_startup()?;
    if let Err(e) = session.run() {
        error!("Session ended with an I/O error: {}", e);
        return Err(e.into());
    }

    info!("Contact book shutdown complete");
    Ok(())
}
