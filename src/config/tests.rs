// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.project.port, 8080);
    assert_eq!(config.project.base, "./");
    assert_eq!(config.project.env_file, PathBuf::from(".env.local"));
    assert!(!config.framework.prefer_source);
    assert_eq!(
        config.framework.prebuilt_path,
        PathBuf::from("src/vendor/solid")
    );
    assert!(!config.features.tls);
    assert!(!config.features.tls_certificates);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
output_log_level = 4

[project]
root = "/srv/webk"
port = 3000

[framework]
prefer_source = true

[features]
tls = true
"#;

    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.project.root, Some(PathBuf::from("/srv/webk")));
    assert_eq!(config.project.port, 3000);
    assert!(config.framework.prefer_source);
    assert!(config.features.tls);
    assert!(!config.features.tls_certificates);
    // untouched sections keep their defaults
    assert_eq!(config.watcher.program, "node");
    assert_eq!(config.page.title, "Telegram Web K");
}

#[test]
fn test_config_rejects_unknown_fields() {
    let toml = r"
[features]
tls = true
analyze = true
";
    let err = Config::parse(toml).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::ParseError(message)) if message.contains("analyze")
    ));
}

#[test]
fn test_config_rejects_zero_port() {
    let err = Config::parse("[project]\nport = 0\n").unwrap_err();
    assert!(err.to_string().contains("port"), "unexpected error: {err}");
}

#[test]
fn test_config_rejects_bad_exclude_glob() {
    let toml = r#"
[test]
exclude = ["**/{unclosed/**"]
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_overrides_take_precedence() {
    let config = ConfigLoader::new()
        .add_toml_str("[features]\ntls = false\n")
        .apply_overrides(&["features.tls=true", "project.port = 9090"])
        .unwrap()
        .build()
        .unwrap();
    assert!(config.features.tls);
    assert_eq!(config.project.port, 9090);
}

#[test]
fn test_malformed_override() {
    let result = ConfigLoader::new().apply_overrides(&["features.tls"]);
    assert!(result.is_err());
}

#[test]
fn test_supplementary_aliases_replace_defaults() {
    let toml = r#"
[framework.aliases]
"motion-helper" = "src/vendor/motion"
"#;
    let config = Config::parse(toml).unwrap();
    let keys: Vec<_> = config.framework.aliases.keys().cloned().collect();
    assert_eq!(keys, ["motion-helper"]);
}

#[test]
fn test_format_options_sorted_and_aligned() {
    let options = Config::default().format_options();
    let keys: Vec<_> = options
        .iter()
        .map(|line| line.split('=').next().unwrap().trim().to_string())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let eq_column = options[0].find(" = ").unwrap();
    assert!(options.iter().all(|l| l.find(" = ") == Some(eq_column)));
    assert!(options.iter().any(|l| l.starts_with("features.tls ")));
}

#[test]
fn test_loaded_files_tracking() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file_optional("/definitely/not/here/webk.toml");
    assert_eq!(loader.loaded_files().len(), 1);
    assert_eq!(loader.format_loaded_files(), ["1. [string] <string>"]);
}
