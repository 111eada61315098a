//! frain - a status checker for various developer tools.
//!
//! Fetches a service's status, components and incident history from the
//! frain backend and prints a report.

use std::process;

use frain::cli;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.wants_usage() {
                eprintln!("\n{}\n\nFor more information, try '--help'.", cli::usage());
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
