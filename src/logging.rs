//! Logging setup
//!
//! Log output goes to stderr through `tracing-subscriber`, leaving stdout for
//! dry-run messages. The level comes from the run's [`Verbosity`]; `RUST_LOG`
//! overrides it when set.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{YnabSmsError, YnabSmsResult};

/// How much the app logs about what it is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings and the outcome of each send
    #[default]
    Basic,
    /// Also dump fetched budgets and the full notification index
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Basic
        }
    }

    pub fn is_verbose(&self) -> bool {
        *self == Self::Verbose
    }

    /// Default filter directive for this verbosity
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Self::Basic => "ynab_sms=info",
            Self::Verbose => "ynab_sms=debug",
        }
    }
}

/// Install the global subscriber
pub fn init_logging(verbosity: Verbosity) -> YnabSmsResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| YnabSmsError::Config(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(?verbosity, "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Verbosity::from_flag(false), Verbosity::Basic);
        assert_eq!(Verbosity::from_flag(true), Verbosity::Verbose);
        assert!(Verbosity::Verbose.is_verbose());
        assert!(!Verbosity::default().is_verbose());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(Verbosity::Basic.filter_directive(), "ynab_sms=info");
        assert_eq!(Verbosity::Verbose.filter_directive(), "ynab_sms=debug");
    }
}
