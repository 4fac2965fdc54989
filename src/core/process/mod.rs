// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("node")
//!   .args() .cwd() .name()
//!   .run_with_cancellation(token)
//!       --> resolve() (which: PATH, cwd)
//!       --> tokio::process::Command (kill_on_drop)
//!           stdout/stderr lines --> tracing
//!       --> ProcessOutput { exit_code, interrupted }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
