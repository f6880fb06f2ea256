//! # ITAM Console Entry Point
//!
//! Runs a scripted session (sign-up, sign-in, every dashboard module,
//! logout, password reset) against the simulated backend and logs each
//! notification and navigation.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `ITAM_*` environment variables
//! 3. Mount each view in turn and drive it
//!
//! Set `ITAM_SIMULATE_FAILURE=true` to watch the failure path instead.

use std::process::ExitCode;

use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    itam_console::init_tracing();

    info!("Starting ITAM Console");

    match itam_console::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "console session failed");
            ExitCode::FAILURE
        }
    }
}
