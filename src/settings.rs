//! Resolved runtime settings.
//!
//! This module turns the raw [`Cli`] flags and the merged [`Config`] into a
//! single [`Settings`] value that the mode handlers consume.  It deliberately
//! does **not** perform any I/O — every function here is pure and trivially
//! unit-testable.
//!
//! # Precedence
//!
//! Command-line values always win over configuration-file values.  A setting
//! absent from both is a [`SettingsError::MissingKey`], which the caller
//! treats as fatal (logged, exit status 1).

use std::path::PathBuf;

use thiserror::Error;

use crate::{cli::Cli, config::Config};

/// Config section the connection keys live in, named in error messages.
const SECTION: &str = "rainmachine";

// ─── Errors ───────────────────────────────────────────────────────────────────

/// A setting required by the selected mode could not be resolved.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Neither the command line nor any config file supplied the key.
    #[error("missing configuration setting: [{section}] {key}")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },
}

// ─── Types ────────────────────────────────────────────────────────────────────

/// Which of the two modes the user selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Backup,
    Restore,
}

/// Fully-resolved settings for one run of a mode.
///
/// Constructed by [`resolve`] only when a mode is selected; with no mode
/// there is nothing to resolve and no key is required.
#[derive(Debug, Clone)]
pub struct Settings {
    /// IP address or hostname of the controller.
    pub host: String,
    /// Controller username.
    pub user: String,
    /// Controller password.
    pub pass: String,
    /// Backup file to write (backup) or read (restore).
    pub file: PathBuf,
    /// The selected mode.
    pub mode: Mode,
}

// ─── Resolution ───────────────────────────────────────────────────────────────

/// The mode selected on the command line, if any.
///
/// `--backup` and `--restore` are declared mutually exclusive in
/// [`crate::cli`], so both being set is unreachable past argument parsing.
pub fn mode(cli: &Cli) -> Option<Mode> {
    if cli.backup {
        Some(Mode::Backup)
    } else if cli.restore {
        Some(Mode::Restore)
    } else {
        None
    }
}

/// Resolve the [`Settings`] for `mode` from the command line and the merged
/// configuration.
///
/// `host`, `user`, and `pass` are required; each falls back from the command
/// line to the config file and errors if absent from both.  `file` falls back
/// further to `<host>.json`, the name of the controller itself.
pub fn resolve(cli: &Cli, cfg: &Config, mode: Mode) -> Result<Settings, SettingsError> {
    let section = &cfg.rainmachine;

    let host = pick(cli.host.as_deref(), section.host.as_deref(), "host")?;
    let user = pick(cli.user.as_deref(), section.user.as_deref(), "user")?;
    let pass = pick(cli.password.as_deref(), section.pass.as_deref(), "pass")?;

    let file = cli
        .file
        .clone()
        .or_else(|| section.file.as_deref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(format!("{host}.json")));

    Ok(Settings {
        host,
        user,
        pass,
        file,
        mode,
    })
}

/// First of `cli` / `cfg` that is set, or a `MissingKey` error naming `key`.
fn pick(
    cli: Option<&str>,
    cfg: Option<&str>,
    key: &'static str,
) -> Result<String, SettingsError> {
    cli.or(cfg)
        .map(str::to_owned)
        .ok_or(SettingsError::MissingKey {
            section: SECTION,
            key,
        })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
