//! Blocking wait for a termination signal.
//!
//! The tool runs its one-shot logic and then idles until the operator (or the
//! OS) tells it to stop.  The wait runs on a current-thread tokio runtime —
//! the process stays single-threaded, and `block_on` is the only suspension
//! point in the program.
//!
//! On unix both SIGINT (Ctrl-C) and SIGTERM end the wait; elsewhere only
//! Ctrl-C is watched.  Signal delivery is a normal, clean exit, never an
//! error.

use anyhow::{Context, Result};

/// Block the calling thread until a termination signal arrives.
pub fn wait() -> Result<()> {
    log::debug!("idling until termination signal");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building signal runtime")?;

    rt.block_on(wait_inner())?;
    log::info!("caught termination signal, shutting down");
    Ok(())
}

#[cfg(unix)]
async fn wait_inner() -> Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut term = signal(SignalKind::terminate()).context("installing SIGTERM handler")?;

    tokio::select! {
        r = tokio::signal::ctrl_c() => r.context("waiting for interrupt")?,
        _ = term.recv() => {},
    }
    Ok(())
}

#[cfg(not(unix))]
async fn wait_inner() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .context("waiting for interrupt")?;
    Ok(())
}
