//! Log initialisation.
//!
//! A thin wrapper over `env_logger`: `$RUST_LOG` always wins, and when it is
//! unset the default filter comes from the `--debug` / `--quiet` flags.
//! Timestamps are suppressed — this is an interactive tool, not a daemon.

use env_logger::Env;

use crate::cli::Cli;

/// Initialise the global logger.  Call once, before any log macro fires.
pub fn init(cli: &Cli) {
    env_logger::Builder::from_env(
        Env::default().default_filter_or(default_filter(cli.debug, cli.quiet)),
    )
    .format_timestamp(None)
    .init();
}

/// Default level filter for the given verbosity flags.
///
/// The flags are mutually exclusive (enforced by the CLI definition), so the
/// `debug` arm winning on a both-set input is unreachable in practice.
fn default_filter(debug: bool, quiet: bool) -> &'static str {
    if debug {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
