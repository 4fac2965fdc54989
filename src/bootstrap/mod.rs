// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Development environment bootstrap.
//!
//! ```text
//! bootstrap(ctx)
//!    |
//!    +-- not development ──> Skipped (no side effects)
//!    |
//!    v
//! <root>/.env.local exists? ──yes──> AlreadyPresent
//!    | no
//!    v
//! copy <root>/.env.local.example verbatim ──> Created
//!    |         (missing example: fatal)
//!    v
//! WatcherHandle::spawn (fire-and-forget)
//! ```
//!
//! [`prepare_env`] stops before the watcher step.
//!
//! Must run before anything reads the override file.

pub mod watcher;


use std::path::Path;
use tracing::{debug, info};

use crate::context::BuildContext;
use crate::error::{BootstrapError, FsError, Result};
use crate::utility::fs::copy::{CopyOutcome, copy_file_if_absent};

pub use watcher::WatcherHandle;

/// What happened to the environment-override file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Not in development mode; nothing was touched.
    Skipped,
    /// The override file was created from the example.
    Created,
    /// The override file already existed and was left alone.
    AlreadyPresent,
}

/// Result of a bootstrap run.
#[derive(Debug)]
pub struct Bootstrap {
    pub outcome: BootstrapOutcome,
    /// Running watcher, if one was started.
    pub watcher: Option<WatcherHandle>,
}

/// Prepare the local development environment.
///
/// In development mode this makes sure the environment-override file exists
/// and then starts the localization watcher. In any other mode it does
/// nothing. Must be called from within a Tokio runtime when the watcher is
/// enabled.
///
/// # Errors
///
/// Returns [`BootstrapError::MissingExample`] when the override file is
/// absent and the example cannot be found, or [`BootstrapError::CopyFailed`]
/// if the copy fails. The watcher is not started in either case.
pub fn bootstrap(ctx: &BuildContext) -> Result<Bootstrap> {
    let outcome = prepare_env(ctx)?;
    if outcome == BootstrapOutcome::Skipped {
        return Ok(Bootstrap {
            outcome,
            watcher: None,
        });
    }

    let watcher_config = &ctx.config().watcher;
    let watcher = if watcher_config.enabled {
        Some(WatcherHandle::spawn(watcher_config, ctx.root())?)
    } else {
        debug!("localization watcher disabled");
        None
    };

    Ok(Bootstrap { outcome, watcher })
}

/// The env-file half of [`bootstrap`], without starting the watcher.
///
/// # Errors
///
/// See [`bootstrap`].
pub fn prepare_env(ctx: &BuildContext) -> std::result::Result<BootstrapOutcome, BootstrapError> {
    if !ctx.is_development() {
        debug!(mode = %ctx.env().mode, "not in development mode, skipping bootstrap");
        return Ok(BootstrapOutcome::Skipped);
    }

    let project = &ctx.config().project;
    ensure_env_file(ctx.root(), &project.env_file, &project.env_example)
}

/// Create `root/env_file` from `root/example` unless it already exists.
///
/// # Errors
///
/// See [`bootstrap`].
pub fn ensure_env_file(
    root: &Path,
    env_file: &Path,
    example: &Path,
) -> std::result::Result<BootstrapOutcome, BootstrapError> {
    let target = root.join(env_file);
    let source = root.join(example);

    match copy_file_if_absent(&source, &target) {
        Ok(CopyOutcome::Kept) => {
            debug!(path = %target.display(), "environment override present");
            Ok(BootstrapOutcome::AlreadyPresent)
        }
        Ok(CopyOutcome::Copied) => {
            info!(
                path = %target.display(),
                from = %source.display(),
                "created environment override"
            );
            Ok(BootstrapOutcome::Created)
        }
        Err(FsError::NotFound(path)) => Err(BootstrapError::MissingExample { path }),
        Err(FsError::IoError { source: err, .. }) => Err(BootstrapError::CopyFailed {
            from: source.display().to_string(),
            to: target.display().to_string(),
            source: err,
        }),
    }
}
