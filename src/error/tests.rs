// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{BootstrapError, BuildError, BuildResult, ConfigError, PluginError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "project".to_string(),
        key: "port".to_string(),
        message: "must be non-zero".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'port' in section '[project]': must be non-zero"
    );
}

#[test]
fn test_missing_example_display() {
    let err = BootstrapError::MissingExample {
        path: "/repo/.env.local.example".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"example environment file not found: /repo/.env.local.example"
    );
}

#[test]
fn test_boxed_conversion_wraps_variant() {
    let err: BuildError = PluginError::ConstructionFailed {
        name: "checker".to_string(),
        message: "bad glob".to_string(),
    }
    .into();
    assert!(matches!(err, BuildError::Plugin(_)));
    assert_eq!(
        err.to_string(),
        "plugin error: failed to construct plugin 'checker': bad glob"
    );
}

#[test]
fn test_build_error_size() {
    // one thin Box per variant, plus discriminant
    let size = std::mem::size_of::<BuildError>();
    assert!(size <= 16, "BuildError is {size} bytes, expected <= 16");
}

#[test]
fn test_build_result_size() {
    let size = std::mem::size_of::<BuildResult<()>>();
    assert!(size <= 16, "BuildResult<()> is {size} bytes, expected <= 16");
}

#[test]
fn test_parse_error_display() {
    let err: BuildError = ConfigError::ParseError("missing field `port`".to_string()).into();
    assert_eq!(
        err.to_string(),
        "config error: failed to load config: missing field `port`"
    );
}
