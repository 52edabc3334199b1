// SPDX-License-Identifier: MIT
//
// Tracing subscriber setup.
//
// Logs go to stderr so they never land inside the stdout render stream.
// Filter priority, highest first:
//
//   1. SYNAPSE_LOG   per-target directives, e.g. `synapse_scan=debug,warn`
//   2. RUST_LOG      the usual fallback
//   3. -v / -q       debug / error
//   4. default       warn

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Project-specific filter variable.
pub const LOG_ENV: &str = "SYNAPSE_LOG";

/// Target prefix shared by the binary and every workspace crate.
const TARGET_PREFIX: &str = "synapse";

/// How chatty the logs are, from the CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `-v` wins over `-q` when both are given.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }

    /// Filter directive used when neither environment variable is set.
    #[must_use]
    pub fn directive(self) -> String {
        let level = self.default_level();
        if self == Self::Verbose {
            format!("{},{TARGET_PREFIX}=debug", Level::WARN)
        } else {
            level.to_string()
        }
    }
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init_subscriber(verbosity: Verbosity) {
    let filter = build_env_filter(verbosity);
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(true)
        .with_level(true);

    let registry = tracing_subscriber::registry().with(filter);
    let result = if verbosity == Verbosity::Verbose {
        registry.with(layer.with_timer(fmt::time::uptime())).try_init()
    } else {
        registry.with(layer.without_time().compact()).try_init()
    };
    if result.is_err() {
        tracing::debug!("subscriber already installed");
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // An unparseable SYNAPSE_LOG falls through rather than failing the run.
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = verbosity.directive();
    EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flags_to_verbosity() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Verbose);
    }

    #[test]
    fn levels() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::DEBUG);
    }

    #[test]
    fn directives_parse() {
        assert_eq!(Verbosity::Normal.directive(), "WARN");
        assert_eq!(Verbosity::Verbose.directive(), "WARN,synapse=debug");
        for v in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose] {
            assert!(EnvFilter::try_new(v.directive()).is_ok(), "{v:?}");
        }
    }

    #[test]
    fn fallback_filter_builds() {
        let _ = build_env_filter(Verbosity::Normal);
        let _ = build_env_filter(Verbosity::Verbose);
    }
}
