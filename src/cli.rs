// SPDX-License-Identifier: MIT
//
// Command line and environment.
//
// There is no config file. Flags and a couple of environment toggles are
// merged once into a `Config`, which the rest of the program reads.
// Terminal width is deliberately absent: renderers ask the viewport.

use std::time::Duration;

use clap::Parser;
use synapse_render::rain::Rain;
use synapse_scan::Query;
use synapse_scan::source::DEFAULT_MAX_RESULTS;
use synapse_theme::{Theme, builtin_theme};

use crate::logging::Verbosity;

/// Any non-empty value turns noir mode on.
pub const NOIR_ENV: &str = "SYNAPSE_NOIR";

/// `1` turns the rain on.
pub const MATRIX_ENV: &str = "SYNAPSE_MATRIX";

/// Pause between progress steps so the bar is visible.
pub const STEP_DELAY: Duration = Duration::from_millis(20);

#[derive(Debug, Parser)]
#[command(name = "synapse", version)]
#[command(about = "Scan open-access research for breakthrough patterns")]
pub struct Cli {
    /// Search terms (latest papers when omitted)
    pub query: Vec<String>,

    /// Papers to fetch
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Greyscale output
    #[arg(long)]
    pub noir: bool,

    /// Matrix rain before the scan
    #[arg(long)]
    pub matrix: bool,

    /// Print the reference screen and exit
    #[arg(long)]
    pub cheat: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Errors only on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Everything a run needs to know, flags and environment merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub query: Option<String>,
    pub max_results: usize,
    pub noir: bool,
    pub matrix: bool,
    pub cheat: bool,
    pub verbosity: Verbosity,
    pub step_delay: Duration,
    pub rain: Rain,
}

impl Config {
    /// Merge parsed flags with the environment, read through `env`.
    pub fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Self {
        let noir_env = env(NOIR_ENV).is_some_and(|v| !v.is_empty());
        let matrix_env = env(MATRIX_ENV).is_some_and(|v| v == "1");

        let joined = cli.query.join(" ");
        let query = if joined.trim().is_empty() {
            None
        } else {
            Some(joined)
        };

        Self {
            query,
            max_results: cli.max_results,
            noir: cli.noir || noir_env,
            matrix: cli.matrix || matrix_env,
            cheat: cli.cheat,
            verbosity: Verbosity::from_flags(cli.verbose, cli.quiet),
            step_delay: STEP_DELAY,
            rain: Rain::default(),
        }
    }

    /// The theme the session starts with.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let name = if self.noir { "noir" } else { "synapse" };
        builtin_theme(name).unwrap_or_default()
    }

    /// What to ask the paper source for.
    #[must_use]
    pub fn paper_query(&self) -> Query {
        self.query.as_deref().map_or_else(
            || Query::recent(self.max_results),
            |terms| Query::search(terms, self.max_results),
        )
    }
}
