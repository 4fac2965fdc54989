// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for webk-build.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. webk.toml (project root, optional)
//! 3. --config FILE (repeatable)
//! 4. WEBK_* env vars
//! 5. --set section.key=value
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! WEBK_FEATURES__TLS=true              → features.tls = true
//! WEBK_FRAMEWORK__PREFER_SOURCE=true   → framework.prefer_source = true
//! WEBK_PROJECT__PORT=8443              → project.port = 8443
//! ```
//!
//! Deployment-mode variables (`NODE_ENV`, `VITEST`, `ANALYZE_BUNDLE`) are not
//! part of this tree; see [`crate::context::BuildEnv`].

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{
    CheckerConfig, FeaturesConfig, FrameworkConfig, GlobalConfig, PageConfig, ProjectConfig,
    TestConfig, TlsConfig, WatcherConfig,
};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub project: ProjectConfig,
    pub page: PageConfig,
    pub framework: FrameworkConfig,
    pub features: FeaturesConfig,
    pub tls: TlsConfig,
    pub watcher: WatcherConfig,
    pub checker: CheckerConfig,
    pub test: TestConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use webk_build::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("webk.toml")
    ///     .with_env_prefix("WEBK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Project root: `project.root` if set, else the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn project_root(&self) -> Result<PathBuf> {
        match &self.project.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero port, empty framework paths, an
    /// empty watcher program, or a test exclude glob that does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.project.port == 0 {
            return Err(invalid("project", "port", "must be non-zero").into());
        }
        if self.framework.source_path.as_os_str().is_empty() {
            return Err(invalid("framework", "source_path", "must not be empty").into());
        }
        if self.framework.prebuilt_path.as_os_str().is_empty() {
            return Err(invalid("framework", "prebuilt_path", "must not be empty").into());
        }
        if self.watcher.enabled && self.watcher.program.trim().is_empty() {
            return Err(invalid("watcher", "program", "must not be empty").into());
        }
        for pattern in &self.test.exclude {
            wax::Glob::new(pattern).map_err(|e| ConfigError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_project_options(&mut options);
        self.format_framework_options(&mut options);
        self.format_feature_options(&mut options);
        self.format_watcher_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("global.json_logs".into(), self.global.json_logs.to_string());
    }

    fn format_project_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "project.root".into(),
            self.project
                .root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "project.env_file".into(),
            self.project.env_file.display().to_string(),
        );
        options.insert(
            "project.env_example".into(),
            self.project.env_example.display().to_string(),
        );
        options.insert("project.base".into(), self.project.base.clone());
        options.insert("project.port".into(), self.project.port.to_string());
        options.insert("page.title".into(), self.page.title.clone());
        options.insert("page.description".into(), self.page.description.clone());
    }

    fn format_framework_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "framework.prefer_source".into(),
            self.framework.prefer_source.to_string(),
        );
        options.insert(
            "framework.source_path".into(),
            self.framework.source_path.display().to_string(),
        );
        options.insert(
            "framework.prebuilt_path".into(),
            self.framework.prebuilt_path.display().to_string(),
        );
        for (specifier, path) in &self.framework.aliases {
            options.insert(
                format!("framework.aliases.{specifier}"),
                path.display().to_string(),
            );
        }
    }

    fn format_feature_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("features.tls".into(), self.features.tls.to_string());
        options.insert(
            "features.tls_certificates".into(),
            self.features.tls_certificates.to_string(),
        );
        options.insert(
            "features.skip_minification".into(),
            self.features.skip_minification.to_string(),
        );
        options.insert("tls.name".into(), self.tls.name.clone());
        options.insert("tls.cert_dir".into(), self.tls.cert_dir.display().to_string());
    }

    fn format_watcher_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("watcher.enabled".into(), self.watcher.enabled.to_string());
        options.insert("watcher.program".into(), self.watcher.program.clone());
        options.insert("watcher.args".into(), self.watcher.args.join(" "));
    }
}

fn invalid(section: &str, key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}
