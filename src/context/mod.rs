// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Immutable inputs of one configuration build.
//!
//! ```text
//! process env ──> BuildEnv { mode, test_run, analyze_bundle }
//!                     |
//! Config ─────────────+──> FeatureFlags (bool toggles)
//!                     |
//!                     v
//!         BuildContext { root, config, env, flags }
//!                     |
//!     bootstrap / framework / plugin / emit (by reference)
//! ```
//!
//! Everything is read once at entry. Nothing downstream looks at
//! `std::env` again.

use bitflags::bitflags;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;

/// Deployment-mode variable.
pub const MODE_VAR: &str = "NODE_ENV";
/// Set by the test runner while it evaluates the configuration.
pub const TEST_RUNNER_VAR: &str = "VITEST";
/// Opt-in for the bundle-visualization plugin.
pub const ANALYZE_BUNDLE_VAR: &str = "ANALYZE_BUNDLE";

/// Deployment mode taken from `NODE_ENV`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    Development,
    #[default]
    Production,
    Other(String),
}

impl Mode {
    /// Parse a `NODE_ENV` value. Only the exact string `development` selects
    /// development mode; an unset variable means production.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            Some("production") | None => Self::Production,
            Some(other) => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Other(mode) => write!(f, "{mode}"),
        }
    }
}

/// Snapshot of the environment variables the build reacts to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub mode: Mode,
    /// Configuration is being evaluated by the test runner.
    pub test_run: bool,
    /// Bundle analysis was requested.
    pub analyze_bundle: bool,
}

impl BuildEnv {
    /// Read the snapshot from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the snapshot from `(name, value)` pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .collect();
        Self::from_lookup(|key| {
            vars.iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // An empty value counts as unset, like an empty string in a JS truthiness check.
        let is_set = |key: &str| lookup(key).is_some_and(|v| !v.is_empty());
        Self {
            mode: Mode::parse(lookup(MODE_VAR).as_deref()),
            test_run: is_set(TEST_RUNNER_VAR),
            analyze_bundle: is_set(ANALYZE_BUNDLE_VAR),
        }
    }
}

bitflags! {
    /// Toggles in effect for one configuration build.
    ///
    /// Plugin slots declare the flags they need and the flags that rule them
    /// out; see [`crate::plugin::pipeline`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct FeatureFlags: u32 {
        /// `NODE_ENV=development`.
        const DEVELOPMENT = 1 << 0;
        /// Running under the test runner.
        const TEST_RUN = 1 << 1;
        /// Serve the dev server over HTTPS.
        const TLS = 1 << 2;
        /// TLS certificate parameters requested.
        const TLS_CERTIFICATES = 1 << 3;
        /// Bundle analysis requested.
        const ANALYZE_BUNDLE = 1 << 4;
        /// Minification disabled.
        const SKIP_MINIFICATION = 1 << 5;
        /// Prefer the framework source checkout over the prebuilt tree.
        const PREFER_FRAMEWORK_SOURCE = 1 << 6;
    }
}

impl FeatureFlags {
    /// Combine static configuration and the environment snapshot.
    #[must_use]
    pub fn collect(config: &Config, env: &BuildEnv) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::DEVELOPMENT, env.mode.is_development());
        flags.set(Self::TEST_RUN, env.test_run);
        flags.set(Self::ANALYZE_BUNDLE, env.analyze_bundle);
        flags.set(Self::TLS, config.features.tls);
        flags.set(Self::TLS_CERTIFICATES, config.features.tls_certificates);
        flags.set(Self::SKIP_MINIFICATION, config.features.skip_minification);
        flags.set(
            Self::PREFER_FRAMEWORK_SOURCE,
            config.framework.prefer_source,
        );
        flags
    }
}

/// Everything a resolver or composer may read.
#[derive(Debug, Clone)]
pub struct BuildContext {
    root: PathBuf,
    config: Config,
    env: BuildEnv,
    flags: FeatureFlags,
}

impl BuildContext {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Config, env: BuildEnv) -> Self {
        let flags = FeatureFlags::collect(&config, &env);
        Self {
            root: root.into(),
            config,
            env,
            flags,
        }
    }

    /// Build from a loaded config, the process environment and the
    /// configured (or current) project root.
    ///
    /// # Errors
    ///
    /// Returns an error if the project root cannot be determined.
    pub fn from_config(config: Config) -> Result<Self> {
        let root = config.project_root()?;
        Ok(Self::new(root, config, BuildEnv::from_env()))
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn env(&self) -> &BuildEnv {
        &self.env
    }

    #[must_use]
    pub const fn flags(&self) -> FeatureFlags {
        self.flags
    }

    #[must_use]
    pub const fn is_development(&self) -> bool {
        self.flags.contains(FeatureFlags::DEVELOPMENT)
    }
}
