//! `rainmachine` — backup/restore utility for RainMachine sprinkler
//! controllers.
//!
//! # Overview
//!
//! This binary is the command-line front-end of the tool: it declares the
//! flag surface, merges command-line values with `rainmachine.toml` defaults
//! (command line wins), and fails fast when a setting the selected mode
//! needs is missing from both.  After its one-shot run it idles until a
//! termination signal arrives and then exits cleanly.
//!
//! # Usage
//!
//! ```text
//! rainmachine --backup --host rainmachine.local -u admin -p secret
//! rainmachine --restore --file garden.json
//! rainmachine init             # scaffold a rainmachine.toml
//! rainmachine --print-config   # show merged config without running anything
//! rainmachine -v               # print the version banner
//! ```
//!
//! # Module layout
//!
//! | Module                 | Responsibility                              |
//! |------------------------|---------------------------------------------|
//! | [`cli`]                | Argument types parsed by clap               |
//! | [`config`]             | `Config` struct + TOML loader and merge     |
//! | [`settings`]           | CLI-over-config resolution, required keys   |
//! | [`logging`]            | env_logger setup                            |
//! | [`commands::backup`]   | `--backup` mode                             |
//! | [`commands::restore`]  | `--restore` mode                            |
//! | [`commands::init`]     | `rainmachine init` subcommand               |
//! | [`shutdown`]           | Blocking wait for a termination signal      |
//! | [`ui`]                 | Version banner, confirmation lines          |

mod cli;
mod commands;
mod config;
mod logging;
mod settings;
mod shutdown;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Subcommand};
use settings::Mode;

fn main() {
    let cli = Cli::parse();

    // -v/--version prints the banner and exits before any configuration or
    // logging is touched.
    if cli.version {
        ui::print_banner();
        return;
    }

    logging::init(&cli);

    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // ── rainmachine init ──────────────────────────────────────────────────────
    if let Some(Subcommand::Init) = cli.command {
        return commands::init::run(&cli.config);
    }

    // ── default invocation ────────────────────────────────────────────────────
    let cfg = config::load_merged(&cli.config)?;
    log::debug!("setup complete");

    if cli.print_config {
        println!("{cfg:#?}");
        return Ok(());
    }

    match settings::mode(cli) {
        Some(mode) => {
            let settings = settings::resolve(cli, &cfg, mode)?;
            match settings.mode {
                Mode::Backup => commands::backup::run(&settings)?,
                Mode::Restore => commands::restore::run(&settings)?,
            }
        },
        None => log::info!("no mode selected; pass --backup or --restore"),
    }

    shutdown::wait()
}
