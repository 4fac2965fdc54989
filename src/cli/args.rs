// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `emit` command.
#[derive(Debug, Clone, Default, Args)]
pub struct EmitArgs {
    /// Writes the configuration to FILE instead of stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Prints single-line JSON.
    #[arg(long)]
    pub compact: bool,

    /// Skips creating the env-override file in development mode.
    #[arg(long = "no-bootstrap")]
    pub no_bootstrap: bool,
}

/// Arguments for the `proxy` command.
#[derive(Debug, Clone, Args)]
pub struct ProxyArgs {
    /// Request path, such as `/api/bot123/getMe`.
    #[arg(value_name = "PATH")]
    pub path: String,
}

/// Arguments for the `dev` command.
#[derive(Debug, Clone, Default, Args)]
pub struct DevArgs {
    /// Also writes the configuration to FILE.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}
