// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["webk", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["webk"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "webk",
        "-l",
        "5",
        "-r",
        "/srv/webk",
        "-c",
        "a.toml",
        "--config",
        "b.toml",
        "--json-logs",
        "plugins",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.root, Some(PathBuf::from("/srv/webk")));
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.json_logs);
    assert!(matches!(cli.command, Some(Command::Plugins)));
}

#[test]
fn test_log_level_range() {
    assert!(Cli::try_parse_from(["webk", "-l", "7", "version"]).is_err());
}

#[test]
fn test_parse_emit() {
    let cli = Cli::try_parse_from(["webk", "emit", "--out", "vite.json", "--compact"]).unwrap();
    let Some(Command::Emit(args)) = cli.command else {
        panic!("expected emit command");
    };
    assert_eq!(args.out, Some(PathBuf::from("vite.json")));
    assert!(args.compact);
    assert!(!args.no_bootstrap);
}

#[test]
fn test_parse_proxy_requires_path() {
    assert!(Cli::try_parse_from(["webk", "proxy"]).is_err());

    let cli = Cli::try_parse_from(["webk", "proxy", "/v1/apiw1"]).unwrap();
    let Some(Command::Proxy(args)) = cli.command else {
        panic!("expected proxy command");
    };
    assert_eq!(args.path, "/v1/apiw1");
}

#[test]
fn test_overrides_order() {
    let cli = Cli::try_parse_from([
        "webk",
        "--set",
        "features.tls=true",
        "-l",
        "4",
        "--log-file",
        "webk.log",
        "--root",
        "/srv/webk",
        "version",
    ])
    .unwrap();

    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "features.tls=true",
            "global.output_log_level=4",
            "global.file_log_level=4",
            "global.log_file=webk.log",
            "project.root=/srv/webk",
        ]
    );
}

#[test]
fn test_file_log_level_overrides_console_level() {
    let cli =
        Cli::try_parse_from(["webk", "-l", "2", "--file-log-level", "5", "version"]).unwrap();
    let overrides = cli.global.to_config_overrides();

    assert!(overrides.contains(&"global.output_log_level=2".to_string()));
    assert!(overrides.contains(&"global.file_log_level=5".to_string()));
}
