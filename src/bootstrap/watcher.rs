// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Localization watcher task.
//!
//! ```text
//! WatcherHandle::spawn()
//!        |
//!        v
//!  tokio::spawn ──> ProcessBuilder::run_with_cancellation(token)
//!        |                  |
//!        |            exit / failure: logged, never returned
//!        v
//!  shutdown(): cancel token, await task
//!  drop:       task detached, lives until the runtime shuts down
//! ```
//!
//! Nothing the watcher produces flows back into the configuration build.

use std::path::Path;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::types::WatcherConfig;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;

/// Handle to the background localization watcher.
#[derive(Debug)]
pub struct WatcherHandle {
    command: String,
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl WatcherHandle {
    /// Start the watcher process in `root` on the current Tokio runtime.
    ///
    /// Returns as soon as the task is scheduled. Spawn failures and non-zero
    /// exits are logged from inside the task.
    ///
    /// # Errors
    ///
    /// Returns an error only when called outside a Tokio runtime.
    pub fn spawn(config: &WatcherConfig, root: &Path) -> Result<Self> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|e| {
            anyhow::anyhow!("no async runtime available to host the localization watcher: {e}")
        })?;

        let builder = ProcessBuilder::new(&config.program)
            .args(&config.args)
            .cwd(root)
            .name("lang-watcher");
        let command = builder.command_line();
        let token = CancellationToken::new();

        let task_token = token.clone();
        let task = runtime.spawn(async move {
            match builder.run_with_cancellation(task_token).await {
                Ok(output) if output.is_interrupted() => debug!("localization watcher stopped"),
                Ok(output) => {
                    info!(exit_code = output.exit_code(), "localization watcher exited");
                }
                Err(e) => warn!(error = %format!("{e:#}"), "localization watcher failed"),
            }
        });

        info!(cmd = %command, "started localization watcher");
        Ok(Self {
            command,
            token,
            task,
        })
    }

    /// Command line the watcher was started with.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Whether the watcher task has already ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the watcher and wait for its task to end.
    pub async fn shutdown(self) {
        self.token.cancel();
        if self.task.is_finished() {
            return;
        }
        if let Err(e) = self.task.await {
            warn!(error = %e, "localization watcher task did not end cleanly");
        }
    }

    /// Wait until the watcher ends on its own.
    ///
    /// Once this returns the task is gone; [`shutdown`](Self::shutdown) is
    /// then a no-op.
    pub async fn wait(&mut self) {
        if self.task.is_finished() {
            return;
        }
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "localization watcher task did not end cleanly");
        }
    }
}
