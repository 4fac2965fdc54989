// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              BuildError (16 bytes)
//!                     |
//!   +--------+--------+--------+--------+
//!   |        |        |        |        |
//!   v        v        v        v        v
//! Bootstrap Config  Plugin  Process    Fs
//!   Box      Box     Box      Box      Box
//!
//! Sub-errors (unboxed internally):
//!   Bootstrap  MissingExample, CopyFailed
//!   Config     ParseError, InvalidValue, InvalidGlob, MalformedOverride
//!   Plugin     ConstructionFailed
//!   Process    ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Fs         NotFound, IoError
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`BuildError`].
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Environment bootstrap failed; the configuration build must stop.
    #[error("bootstrap error: {0}")]
    Bootstrap(#[from] Box<BootstrapError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// A plugin could not be constructed.
    #[error("plugin error: {0}")]
    Plugin(#[from] Box<PluginError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BuildError {
                fn from(err: $error) -> Self {
                    BuildError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    BootstrapError => Bootstrap,
    ConfigError => Config,
    PluginError => Plugin,
    ProcessError => Process,
    FsError => Fs,
}

// --- Bootstrap Errors ---

/// Errors raised while preparing the local development environment.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The checked-in example file is missing, so the override file cannot be created.
    #[error("example environment file not found: {path}")]
    MissingExample { path: String },

    /// Copying the example file into place failed.
    #[error("failed to copy '{from}' to '{to}': {source}")]
    CopyFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or did not match the schema.
    #[error("failed to load config: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A glob pattern could not be compiled.
    #[error("invalid glob '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A `--set` override was not of the form `section.key=value`.
    #[error("malformed override '{0}' (expected KEY=VALUE)")]
    MalformedOverride(String),
}

// --- Plugin Errors ---

/// Plugin construction errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The factory for a plugin slot failed.
    #[error("failed to construct plugin '{name}': {message}")]
    ConstructionFailed { name: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH or relative to the working directory.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
