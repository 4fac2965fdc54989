// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dev command implementation.
//!
//! ```text
//! bootstrap ──> emit ──> (write --out) ──> wait for Ctrl-C or watcher exit
//!                                                 |
//!                                          watcher.shutdown()
//! ```

use anyhow::Context;
use tracing::{info, warn};

use crate::bootstrap::bootstrap;
use crate::cli::args::DevArgs;
use crate::cmd::emit::write_config;
use crate::context::BuildContext;
use crate::emit::emit;
use crate::error::Result;

/// Main handler for the dev command.
///
/// # Errors
///
/// Returns an error if the bootstrap or composition fails, the output cannot
/// be written, or the Ctrl-C handler cannot be installed.
pub async fn run_dev_command(args: &DevArgs, ctx: &BuildContext) -> Result<()> {
    if !ctx.is_development() {
        warn!(mode = %ctx.env().mode, "NODE_ENV is not 'development'; nothing to bootstrap");
    }

    let prepared = bootstrap(ctx)?;
    let config = emit(ctx)?;
    if let Some(path) = &args.out {
        write_config(path, &config.to_json(false)?)?;
    }

    let Some(mut watcher) = prepared.watcher else {
        info!("no watcher running, done");
        return Ok(());
    };

    info!("development session ready, press Ctrl-C to stop");
    let interrupted = tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            true
        }
        () = watcher.wait() => false,
    };

    if interrupted {
        info!("stopping localization watcher");
        watcher.shutdown().await;
    } else {
        warn!("localization watcher ended on its own");
    }
    Ok(())
}
