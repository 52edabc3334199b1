// SPDX-License-Identifier: MIT
//
// synapse — scan open-access research and draw what turns up.
//
// This binary wires the workspace crates together:
//
//   synapse-scan   → fetch papers, detect patterns, count keywords
//   synapse-render → banner, progress, discoveries, sparklines, summary
//   synapse-term   → ANSI output, cursor guard, interrupt handling
//
// Exit status: 0 on success (including an empty result), 1 when the fetch
// fails, 130 when interrupted.

mod app;
mod cli;
mod logging;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use synapse_render::{Session, cheat};
use synapse_scan::ArxivClient;
use synapse_term::{Interrupt, LiveViewport};

use crate::app::RunError;
use crate::cli::{Cli, Config};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(cli, |key| std::env::var(key).ok());
    logging::init_subscriber(config.verbosity);

    match try_main(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("synapse: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> anyhow::Result<ExitCode> {
    if config.cheat {
        cheat::render(&mut io::stdout().lock()).context("printing reference screen")?;
        return Ok(ExitCode::SUCCESS);
    }

    let interrupt = Interrupt::install().context("installing Ctrl-C handler")?;
    let source = ArxivClient::new().context("building HTTP client")?;

    let result = {
        let mut session = Session::new(io::stdout().lock(), config.theme(), LiveViewport);
        app::run(config, &source, &interrupt, &mut session, &mut rand::rng())
    };

    match result {
        Ok(report) => {
            tracing::debug!(?report, "done");
            Ok(ExitCode::SUCCESS)
        }
        Err(RunError::Io(err)) => Err(err).context("writing to the terminal"),
        Err(err) => {
            tracing::debug!(error = %err, "run ended early");
            Ok(exit_code(&err))
        }
    }
}

fn exit_code(err: &RunError) -> ExitCode {
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
