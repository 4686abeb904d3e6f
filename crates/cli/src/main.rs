// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsr: run a script and print its captured console output

mod args;
mod color;
mod exit_error;
mod logging;
mod output;
mod snippets;

use clap::Parser;
use jsr_engine::Coordinator;

use crate::args::Cli;
use crate::exit_error::{ExitError, EXIT_USAGE};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(err) = run(cli).await {
        let code = match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("jsr: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("jsr: {err:#}");
                EXIT_USAGE
            }
        };
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.run_config().map_err(|e| ExitError::usage(e.to_string()))?;
    let source = cli.source().read()?;
    tracing::debug!(?config, "starting");

    let coordinator = Coordinator::new(config);
    let outcome = coordinator.run(&source).await;
    output::print_outcome(&outcome, cli.output)?;

    if !outcome.is_success() {
        return Err(ExitError::failed().into());
    }
    Ok(())
}
