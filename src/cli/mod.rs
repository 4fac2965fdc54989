// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! webk [global options] <command>
//! version
//! options
//! inis
//! emit [--out FILE] [--compact]
//! resolve
//! plugins
//! proxy <PATH>
//! dev [--out FILE]
//! ```

pub mod args;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::args::{DevArgs, EmitArgs, ProxyArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Web K build configuration composer
///
/// Composes the bundler configuration for the web client.
#[derive(Debug, Parser)]
#[command(
    name = "webk",
    author,
    version,
    about = "Web K build configuration composer",
    long_about = "webk-build Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Composes the bundler configuration for the web client:\n\
                  plugins, module aliases, dev-server proxy rules and the\n\
                  test-runner profile. Run `webk emit` to print it as JSON,\n\
                  or `webk dev` to prepare a development session.",
    after_help = "CONFIG FILES:\n\n\
                  webk reads `webk.toml` from the current directory if it\n\
                  exists. Files given with --config are loaded after it, in\n\
                  order. WEBK_<SECTION>__<KEY> environment variables come next,\n\
                  and --set overrides win over everything else.\n\n\
                  NODE_ENV, VITEST and ANALYZE_BUNDLE are read once at start-up."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the config files that were loaded.
    Inis,

    /// Bootstraps the environment and prints the bundler configuration.
    Emit(EmitArgs),

    /// Shows the selected UI library variant and the alias table.
    Resolve,

    /// Lists the plugin pipeline for the current environment.
    Plugins,

    /// Shows which proxy rule handles a request path.
    Proxy(ProxyArgs),

    /// Prepares a development session and keeps the watcher running.
    Dev(DevArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}
