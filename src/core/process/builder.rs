// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder and result types.

use std::path::{Path, PathBuf};

use crate::error::ProcessError;

/// Outcome of a finished (or interrupted) process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    interrupted: bool,
}

impl ProcessOutput {
    pub(super) const fn new(exit_code: i32, interrupted: bool) -> Self {
        Self {
            exit_code,
            interrupted,
        }
    }

    /// Exit code, or `-1` when the process was killed by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Whether the run was ended by cancellation.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A long-running child process description.
///
/// Output lines are forwarded to the log; nothing is captured.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    name: Option<String>,
}

impl ProcessBuilder {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            name: None,
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Name used in log lines and errors instead of the program stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Locates the program the way the child would see it.
    ///
    /// Bare names are searched in `PATH`; relative paths are resolved
    /// against the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::ExecutableNotFound`] if no executable matches.
    pub fn resolve(&self) -> Result<PathBuf, ProcessError> {
        let cwd = self.cwd.as_deref().unwrap_or_else(|| Path::new("."));
        which::which_in(&self.program, std::env::var_os("PATH"), cwd).map_err(|_| {
            ProcessError::ExecutableNotFound {
                name: self.program.display().to_string(),
            }
        })
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
