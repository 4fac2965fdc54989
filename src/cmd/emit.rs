// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Emit command implementation.

use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

use crate::bootstrap::{BootstrapOutcome, prepare_env};
use crate::cli::args::EmitArgs;
use crate::context::BuildContext;
use crate::emit::emit;
use crate::error::Result;

/// Main handler for the emit command.
///
/// Only the env-file step of the bootstrap runs here. The watcher outlives
/// a one-shot emit only under `dev`.
///
/// # Errors
///
/// Returns an error if the bootstrap fails, the configuration cannot be
/// composed, or the output file cannot be written.
pub async fn run_emit_command(args: &EmitArgs, ctx: &BuildContext) -> Result<()> {
    if args.no_bootstrap {
        debug!("bootstrap skipped on request");
    } else {
        let outcome = prepare_env(ctx)?;
        debug!(?outcome, "bootstrap finished");
        if outcome != BootstrapOutcome::Skipped && ctx.config().watcher.enabled {
            info!("localization watcher not started by emit; run `webk dev` to keep it alive");
        }
    }

    let json = emit(ctx)?.to_json(args.compact)?;
    match &args.out {
        Some(path) => write_config(path, &json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

/// Write the serialized configuration, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_config(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, format!("{json}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote bundler configuration");
    Ok(())
}
