//! `rainmachine init` — scaffold a starter `rainmachine.toml`.
//!
//! The generated file carries the `[rainmachine]` section with every
//! recognised key present but commented out, so an operator only has to
//! uncomment and fill in the lines they need.  An existing file is never
//! overwritten.

use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::ui;

/// Starter configuration written by `rainmachine init`.
const STARTER_CONFIG: &str = r#"# rainmachine configuration.
#
# Command-line flags override anything set here.

[rainmachine]
# IP address or hostname of the controller.
# host = "rainmachine.local"

# Credentials used when talking to the controller.
# user = "admin"
# pass = ""

# Backup file path.  Defaults to "<host>.json".
# file = "rainmachine-settings.json"
"#;

/// Write the starter config to `path`.
///
/// Fails if `path` already exists so a hand-edited config can never be
/// clobbered by a stray `init`.
pub fn run(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }

    std::fs::write(path, STARTER_CONFIG).with_context(|| format!("writing {}", path.display()))?;

    ui::success(&format!("wrote {}", path.display()));
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
