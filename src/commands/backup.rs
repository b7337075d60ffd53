//! Backup mode — `rainmachine --backup`.
//!
//! Resolving [`Settings`] has already enforced that `host`, `user`, and
//! `pass` exist and picked the output file, so by the time this handler runs
//! the whole connection profile is known.  The controller API client itself
//! does not exist yet; until it does, a backup run validates the profile,
//! reports what it would do, and leaves the filesystem untouched.

use anyhow::Result;
use log::{debug, info, warn};

use crate::settings::Settings;

/// Run a backup of the configured controller.
pub fn run(settings: &Settings) -> Result<()> {
    info!(
        "backing up controller {} to {}",
        settings.host,
        settings.file.display()
    );
    debug!("authenticating as {}", settings.user);

    warn!("controller transfer is not implemented yet; no backup was written");
    Ok(())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
