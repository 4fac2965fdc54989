// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::path::{Path, PathBuf};
use webk_build::config::Config;
use webk_build::config::loader::ConfigLoader;
use webk_build::context::{BuildContext, BuildEnv, FeatureFlags};
use webk_build::logging::LogLevel;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.project.port, 8080);
    assert_eq!(config.project.base, "./");
    assert_eq!(config.tls.name, "192.168.95.17");
    assert!(!config.features.tls);
    assert!(config.watcher.enabled);
}

#[test]
fn config_parse_features() {
    let toml = r"
[features]
tls = true
tls_certificates = true
skip_minification = true
";
    let config = Config::parse(toml).unwrap();
    let ctx = BuildContext::new("/srv/webk", config, BuildEnv::default());

    assert!(ctx.flags().contains(
        FeatureFlags::TLS | FeatureFlags::TLS_CERTIFICATES | FeatureFlags::SKIP_MINIFICATION
    ));
    assert!(!ctx.flags().contains(FeatureFlags::DEVELOPMENT));
}

#[test]
fn config_parse_framework_section() {
    let toml = r#"
[framework]
prefer_source = true
source_path = "vendor/solid-src"

[framework.aliases]
"solid-transition-group" = "src/vendor/solid-transition-group"
"@shared" = "src/shared"
"#;
    let config = Config::parse(toml).unwrap();

    assert!(config.framework.prefer_source);
    assert_eq!(config.framework.source_path, PathBuf::from("vendor/solid-src"));
    let keys: Vec<_> = config.framework.aliases.keys().map(String::as_str).collect();
    assert_eq!(keys, ["solid-transition-group", "@shared"]);
}

#[test]
fn config_parse_global_section() {
    let toml = r#"
[global]
output_log_level = 5
file_log_level = 2
log_file = "webk.log"
"#;
    let config = Config::parse(toml).unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.global.file_log_level, LogLevel::WARN);
    assert_eq!(config.global.log_file, Some(PathBuf::from("webk.log")));
}

#[test]
fn config_rejects_out_of_range_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

// =============================================================================
// Layered loading
// =============================================================================

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn config_later_files_win() {
    let temp = tempfile::tempdir().unwrap();
    let base = write(temp.path(), "base.toml", "[project]\nport = 3000\n\n[features]\ntls = true\n");
    let local = write(temp.path(), "local.toml", "[project]\nport = 4000\n");

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file(&local)
        .build()
        .unwrap();

    assert_eq!(config.project.port, 4000);
    assert!(config.features.tls);
}

#[test]
fn config_missing_required_file_fails() {
    let temp = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("absent.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_skipped() {
    let temp = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(temp.path().join("webk.toml"));

    assert!(loader.format_loaded_files().is_empty());
    assert_eq!(loader.build().unwrap().project.port, 8080);
}

#[test]
fn config_cli_overrides_beat_files() {
    let temp = tempfile::tempdir().unwrap();
    let file = write(temp.path(), "webk.toml", "[project]\nport = 3000\n");

    let config = ConfigLoader::new()
        .add_toml_file(&file)
        .apply_overrides(&["project.port=8443", "features.tls=true"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.project.port, 8443);
    assert!(config.features.tls);
}

#[test]
fn config_project_root_override() {
    let config = ConfigLoader::new()
        .apply_overrides(&["project.root=/srv/webk"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.project_root().unwrap(), PathBuf::from("/srv/webk"));
}

#[test]
fn config_invalid_glob_fails_build() {
    let result = ConfigLoader::new()
        .add_toml_str("[test]\nexclude = [\"**/{dist/**\"]\n")
        .build();
    assert!(result.is_err());
}
