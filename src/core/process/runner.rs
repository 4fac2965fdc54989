// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run_with_cancellation(token)
//!              |
//!              v
//!     resolve() via PATH / cwd
//!              |
//!              v
//!     build_command()
//!     args, cwd, piped stdio
//!              |
//!              v
//!   spawn() --> run_child (or cancel)
//!              |
//!              v
//!    validate exit_code
//!    (skip if interrupted)
//!              |
//!              v
//!       ProcessOutput
//! ```

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Returns the display name for this process.
    pub(crate) fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(crate) fn command_line(&self) -> String {
        use std::fmt::Write as _;
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process until it exits or `token` is cancelled.
    ///
    /// On cancellation the child is killed and the output is returned with
    /// `interrupted = true`; an interrupted process is never an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The program cannot be found.
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status without being interrupted.
    /// - IO error occurs while waiting.
    pub async fn run_with_cancellation(self, token: CancellationToken) -> Result<ProcessOutput> {
        if token.is_cancelled() {
            return Ok(ProcessOutput::new(-1, true));
        }

        let name = self.display_name();
        let cmd_line = self.command_line();
        let program = self.resolve()?;

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, resolved = %program.display(), "exec");

        let mut child = self
            .build_command(&program)
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line,
                source,
            })?;

        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = Self::run_child_with_cancellation(&name, &mut child, token).await?;

        if !output.is_interrupted() && !output.success() {
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(
            process = %name,
            exit_code = output.exit_code(),
            interrupted = output.is_interrupted(),
            "completed"
        );
        Ok(output)
    }

    fn build_command(&self, program: &Path) -> Command {
        let mut command = Command::new(program);

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        // A dropped handle must not leave an orphaned child behind.
        command.kill_on_drop(true);

        command
    }
}
