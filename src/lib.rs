// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |        emit / inspect / dev
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |  config  ──>  context     |
//!              |  TOML layers   BuildEnv,  |
//!              |                flags      |
//!              '--+------+------+------+---'
//!                 |      |      |      |
//!                 v      v      v      v
//!          bootstrap framework plugin proxy
//!          env file,  variant, pipeline rules,
//!          watcher    aliases          sourcemap
//!                 \      |      |      /
//!                  +-----+--+---+-----+
//!                           v
//!                         emit
//!                  bundler configuration
//!
//!   +-----------------------------------------+
//!   |  core   process                         |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod bootstrap;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod core;
pub mod emit;
pub mod error;
pub mod framework;
pub mod logging;
pub mod plugin;
pub mod proxy;
pub mod utility;
