//! Restore mode — `rainmachine --restore`.
//!
//! The backup file is this mode's input, so its absence is caught here, up
//! front, rather than surfacing later from inside a transfer.  Beyond that
//! check the handler mirrors [`crate::commands::backup`]: the controller API
//! client does not exist yet, so the run validates, reports, and leaves the
//! controller untouched.

use anyhow::{Result, bail};
use log::{debug, info, warn};

use crate::settings::Settings;

/// Restore the configured controller from a backup file.
pub fn run(settings: &Settings) -> Result<()> {
    if !settings.file.exists() {
        bail!("backup file '{}' not found", settings.file.display());
    }

    info!(
        "restoring controller {} from {}",
        settings.host,
        settings.file.display()
    );
    debug!("authenticating as {}", settings.user);

    warn!("controller transfer is not implemented yet; controller settings were left untouched");
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
