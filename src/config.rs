//! Configuration types and loading logic.
//!
//! `Config` is a direct 1-to-1 mapping of `rainmachine.toml`.  Every key is
//! optional — the file only supplies *defaults* for settings that were not
//! given on the command line, and whether a missing setting is an error is
//! decided at resolution time (see [`crate::settings`]), not here.
//!
//! # File format
//!
//! ```toml
//! [rainmachine]
//! host = "rainmachine.local"   # IP address or hostname of the controller
//! user = "admin"               # controller username
//! pass = ""                    # controller password
//! file = "garden.json"         # backup file; defaults to "<host>.json"
//! ```
//!
//! # Sources
//!
//! Two files are consulted and merged per-field, the local file winning:
//!
//! 1. `<config_dir>/rainmachine/config.toml` — machine-wide defaults
//! 2. the `--config` path (default: `./rainmachine.toml`)
//!
//! Either file may be absent.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ─── Types ────────────────────────────────────────────────────────────────────

/// Root configuration object, deserialised from `rainmachine.toml`.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    /// Controller connection defaults.
    #[serde(default)]
    pub rainmachine: ControllerConfig,
}

/// The `[rainmachine]` section — connection defaults for the controller.
///
/// Every field mirrors a command-line flag; command-line values take
/// precedence over anything set here.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct ControllerConfig {
    /// IP address or hostname of the controller.
    #[serde(default)]
    pub host: Option<String>,

    /// Controller username.
    #[serde(default)]
    pub user: Option<String>,

    /// Controller password.
    ///
    /// **Do not store real passwords in plain-text config files that are
    /// committed to version control.**
    #[serde(default)]
    pub pass: Option<String>,

    /// Backup file path.  When unset, `<host>.json` is used.
    #[serde(default)]
    pub file: Option<String>,
}

// ─── Merge ────────────────────────────────────────────────────────────────────

impl Config {
    /// Merge `over` on top of `self`, field by field.
    ///
    /// A field set in `over` wins; a field absent in `over` falls through to
    /// `self`.  Used to layer the local config over the machine-wide one.
    #[must_use]
    pub fn merge(self, over: Config) -> Config {
        Config {
            rainmachine: ControllerConfig {
                host: over.rainmachine.host.or(self.rainmachine.host),
                user: over.rainmachine.user.or(self.rainmachine.user),
                pass: over.rainmachine.pass.or(self.rainmachine.pass),
                file: over.rainmachine.file.or(self.rainmachine.file),
            },
        }
    }
}

// ─── Loader ───────────────────────────────────────────────────────────────────

/// Read and parse a `Config` from `path`, returning `None` if the file does
/// not exist.
///
/// Returns an error if the file exists but cannot be read or is not valid
/// TOML.
pub fn parse_partial(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let cfg = toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Some(cfg))
}

/// Load configuration from both sources and merge them.
///
/// 1. `<config_dir>/rainmachine/config.toml` — machine-wide defaults
/// 2. `local_path` (default: `./rainmachine.toml`)
///
/// Local values win on a per-field basis.  A missing file is not an error:
/// the command line may supply every setting on its own.
pub fn load_merged(local_path: &Path) -> Result<Config> {
    let global_path = dirs_next::config_dir().map(|d| d.join("rainmachine").join("config.toml"));

    let global: Config = global_path
        .as_deref()
        .and_then(|p| parse_partial(p).ok().flatten())
        .unwrap_or_default();

    let local: Config = if let Some(cfg) = parse_partial(local_path)? {
        cfg
    } else {
        log::debug!(
            "config file '{}' not found; relying on command-line values",
            local_path.display()
        );
        Config::default()
    };

    Ok(global.merge(local))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
