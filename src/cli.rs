//! Command-line interface definition.
//!
//! All argument parsing lives here so the rest of the codebase can stay
//! agnostic to `clap`.  The `Cli` struct is parsed once in `main` and then
//! passed (by reference) into the command handlers.

use std::path::PathBuf;

use clap::Parser;

/// Long description shown by `--help`.
pub const DESCRIPTION: &str = "\
rainmachine - Backup/Restore utility for RainMachine sprinkler controllers.

Backs up and restores the settings of a RainMachine controller to and from
local files.  Keeping the settings on disk makes it possible to move them to
a new or different device and to version-control them instead of managing
everything through the controller's UI.";

/// Trailer shown after the argument list in `--help`.
pub const EPILOG: &str = "\
Examples:

  $ rainmachine --backup --host rainmachine.local -u admin -p secret
  $ rainmachine --restore --file garden.json

Report bugs, submit feature requests, and/or contribute code over at:
https://github.com/fxstein/rainmachine";

/// Top-level CLI arguments, shared across every subcommand.
#[derive(Parser, Debug)]
#[command(
    name       = "rainmachine",
    about      = "Backup/Restore utility for RainMachine sprinkler controllers",
    long_about = DESCRIPTION,
    after_help = EPILOG,
    // Show a compact two-column help layout.
    help_template = "\
{before-help}{name}
{about}

{usage-heading} {usage}

{all-args}{after-help}"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// IP address or hostname of the RainMachine controller.
    ///
    /// Overrides the `host` key of the `[rainmachine]` config section.
    #[arg(long, visible_alias = "rainmachine")]
    pub host: Option<String>,

    /// Username of the RainMachine controller.
    ///
    /// Overrides the `user` key of the `[rainmachine]` config section.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password of the RainMachine controller.
    ///
    /// Overrides the `pass` key of the `[rainmachine]` config section.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Back up all settings of the specified RainMachine controller.
    #[arg(short, long, conflicts_with = "restore")]
    pub backup: bool,

    /// Restore all settings of the specified RainMachine controller.
    #[arg(short, long)]
    pub restore: bool,

    /// Name of the backup file.
    ///
    /// Defaults to the name of the RainMachine controller with a `.json`
    /// extension, e.g. `rainmachine.local.json`.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print the version banner and exit.
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Path to the configuration file.
    ///
    /// Defaults to `rainmachine.toml` in the current working directory.
    /// Values found there fill in any connection setting not given on the
    /// command line.
    #[arg(short, long, default_value = "rainmachine.toml")]
    pub config: PathBuf,

    /// Subcommand to run.  Omit to run the selected mode (or idle).
    #[command(subcommand)]
    pub command: Option<Subcommand>,

    /// Print the merged configuration and exit without running anything.
    #[arg(long)]
    pub print_config: bool,

    /// Log at debug level.
    #[arg(long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Log errors only.
    #[arg(long)]
    pub quiet: bool,
}

/// Explicit subcommands.  Running `rainmachine` with no subcommand resolves
/// the flags and runs the selected mode.
#[derive(clap::Subcommand, Debug, PartialEq)]
pub enum Subcommand {
    /// Scaffold a `rainmachine.toml` in the current directory.
    ///
    /// The generated file contains a pre-populated `[rainmachine]` section
    /// with every recognised key commented out.  Exits with an error if the
    /// file already exists to avoid accidental overwrites.
    Init,
}

// ─── Tests ────────────────────────────────────────────────────────────────────
