//! winshow — show-or-run window activation
//!
//! Locates a running application window by its class name and either
//! presents it on the current desktop, minimizes it if it is already
//! focused, or replaces this process with the application's executable
//! when no window matches. One snapshot decision per invocation, meant
//! to sit behind a keybinding or launcher.

mod cli;
mod launch;
mod workflow;
mod x11;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Args;
use crate::workflow::Outcome;
use crate::x11::atoms::Atoms;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version land here too; only usage errors fail.
        Err(err) => {
            let usage_error = err.use_stderr();
            let _ = err.print();
            return if usage_error { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&args) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Launch) => {
            let executable = args.executable();
            info!("executing '{}'", executable);
            match launch::exec(executable) {
                // exec only returns on failure
                Err(err) => {
                    error!("{:#}", err);
                    ExitCode::FAILURE
                }
                Ok(()) => ExitCode::SUCCESS,
            }
        }
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Run one decision pass against the X server.
///
/// The connection is scoped to this call, so it is torn down on every
/// exit path before the launch hand-off replaces the process.
fn run(args: &Args) -> Result<Outcome> {
    let (conn, screen_num) = x11rb::connect(None).context("could not open the default display")?;
    let atoms = Atoms::new(&conn)?;
    workflow::run(&conn, &atoms, screen_num, &args.class)
}
