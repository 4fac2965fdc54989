// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use std::path::PathBuf;
use webk_build::cli::global::GlobalOptions;
use webk_build::cli::{Cli, Command};

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["webk", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["webk", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_inspection_commands() {
    for (arg, expected) in [("options", "Options"), ("inis", "Inis"), ("resolve", "Resolve")] {
        let cli = Cli::try_parse_from(["webk", arg]).unwrap();
        let name = format!("{:?}", cli.command.unwrap());
        assert_eq!(name, expected);
    }
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["webk", "build"]).is_err());
}

// =============================================================================
// Emit / Dev
// =============================================================================

#[test]
fn cli_emit_defaults() {
    let cli = Cli::try_parse_from(["webk", "emit"]).unwrap();
    let Some(Command::Emit(args)) = cli.command else {
        panic!("expected emit");
    };
    assert_eq!(args.out, None);
    assert!(!args.compact);
    assert!(!args.no_bootstrap);
}

#[test]
fn cli_emit_no_bootstrap() {
    let cli = Cli::try_parse_from(["webk", "emit", "--no-bootstrap", "-o", "dist/vite.json"])
        .unwrap();
    let Some(Command::Emit(args)) = cli.command else {
        panic!("expected emit");
    };
    assert!(args.no_bootstrap);
    assert_eq!(args.out, Some(PathBuf::from("dist/vite.json")));
}

#[test]
fn cli_dev_with_out() {
    let cli = Cli::try_parse_from(["webk", "dev", "--out", "vite.json"]).unwrap();
    let Some(Command::Dev(args)) = cli.command else {
        panic!("expected dev");
    };
    assert_eq!(args.out, Some(PathBuf::from("vite.json")));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_before_command() {
    let cli = Cli::try_parse_from(["webk", "--set", "features.tls=true", "-l", "4", "plugins"])
        .unwrap();
    assert_eq!(cli.global.options, ["features.tls=true"]);
    assert_eq!(cli.global.log_level, Some(4));
}

#[test]
fn cli_multiple_sets() {
    let cli = Cli::try_parse_from([
        "webk",
        "-s",
        "features.tls=true",
        "-s",
        "features.tls_certificates=true",
        "--no-default-config",
        "emit",
    ])
    .unwrap();
    assert_eq!(cli.global.options.len(), 2);
    assert!(cli.global.no_default_config);
}

#[test]
fn cli_default_overrides_empty() {
    assert!(GlobalOptions::default().to_config_overrides().is_empty());
}

#[test]
fn cli_json_logs_override() {
    let global = GlobalOptions {
        json_logs: true,
        ..GlobalOptions::default()
    };
    assert_eq!(global.to_config_overrides(), ["global.json_logs=true"]);
}
