// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for webk-build.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, PageConfig, FrameworkConfig,
//!         FeaturesConfig, TlsConfig, WatcherConfig, CheckerConfig, TestConfig
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Emit console logs as JSON lines.
    pub json_logs: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            json_logs: false,
        }
    }
}

/// Project layout and dev-server basics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project root. Defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Local environment-override file, relative to the root.
    pub env_file: PathBuf,
    /// Checked-in example the override file is created from.
    pub env_example: PathBuf,
    /// Public base path of the generated bundle.
    pub base: String,
    /// Dev-server port.
    pub port: u16,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root: None,
            env_file: PathBuf::from(".env.local"),
            env_example: PathBuf::from(".env.local.example"),
            base: "./".to_string(),
            port: 8080,
        }
    }
}

/// Metadata substituted into the generated HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub title: String,
    pub description: String,
    pub url: String,
    pub origin: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Telegram Web K".to_string(),
            description: "Telegram Web K - Modified Version".to_string(),
            url: "./".to_string(),
            origin: "./".to_string(),
        }
    }
}

/// Where the UI library comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Prefer the source checkout over the prebuilt tree.
    ///
    /// There is no fallback: when the preferred tree is absent the upstream
    /// package is used, even if the other tree exists.
    pub prefer_source: bool,
    /// Source checkout, relative to the root.
    pub source_path: PathBuf,
    /// Prebuilt artifact tree, relative to the root.
    pub prebuilt_path: PathBuf,
    /// Aliases applied regardless of the variant, relative to the root.
    pub aliases: IndexMap<String, PathBuf>,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        let mut aliases = IndexMap::new();
        aliases.insert(
            "solid-transition-group".to_string(),
            PathBuf::from("src/vendor/solid-transition-group"),
        );
        Self {
            prefer_source: false,
            source_path: PathBuf::from("src/solid/packages/solid"),
            prebuilt_path: PathBuf::from("src/vendor/solid"),
            aliases,
        }
    }
}

/// Static feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    /// Serve the dev server over HTTPS.
    pub tls: bool,
    /// Pass the `[tls]` certificate parameters (only with `tls`).
    pub tls_certificates: bool,
    /// Disable minification of the production bundle.
    pub skip_minification: bool,
}

/// Certificate parameters for the TLS plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TlsConfig {
    /// Host name the certificate is issued for.
    pub name: String,
    /// Directory holding the certificate material.
    pub cert_dir: PathBuf,
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            name: "192.168.95.17".to_string(),
            cert_dir: PathBuf::from("./certs/"),
        }
    }
}

/// Localization watcher started in development mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatcherConfig {
    pub enabled: bool,
    pub program: String,
    pub args: Vec<String>,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "node".to_string(),
            args: vec!["watch-lang.js".to_string()],
        }
    }
}

/// Type/lint checker plugin options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    pub typescript: bool,
    /// Files handed to eslint.
    pub lint_glob: String,
    /// Passed to eslint as `--ignore-pattern`.
    pub ignore_pattern: String,
    pub use_flat_config: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            typescript: true,
            lint_glob: "./src/**/*.{ts,tsx}".to_string(),
            ignore_pattern: "/src/solid/*".to_string(),
            use_flat_config: true,
        }
    }
}

/// Test-runner profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    pub exclude: Vec<String>,
    pub environment: String,
    pub setup_files: Vec<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            exclude: [
                "**/node_modules/**",
                "**/dist/**",
                "**/cypress/**",
                "**/.{idea,git,cache,output,temp}/**",
                "**/{karma,rollup,webpack,vite,vitest,jest,ava,babel,nyc,cypress,tsup,build}.config.*",
                "**/solid/**",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            environment: "jsdom".to_string(),
            setup_files: vec!["./src/tests/setup.ts".to_string()],
        }
    }
}
