// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), emit, inspect (resolve, plugins, proxy), dev
//! ```

pub mod config;
pub mod dev;
pub mod emit;
pub mod inspect;
