// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use wax::Program as _;

use crate::config::types::TestConfig;
use crate::error::ConfigError;

/// File pattern the test runner transforms for the web environment.
pub const WEB_TRANSFORM_PATTERN: &str = ".[jt]sx?$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestTransformMode {
    pub web: Vec<String>,
}

/// Test-runner section of the configuration.
///
/// Built from `[test]` alone; feature flags never change it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestProfile {
    exclude: Vec<String>,
    /// `exclude`, compiled once.
    #[serde(skip)]
    exclude_globs: Vec<wax::Glob<'static>>,
    environment: String,
    test_transform_mode: TestTransformMode,
    threads: bool,
    isolate: bool,
    globals: bool,
    setup_files: Vec<String>,
}

impl TestProfile {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGlob`] for the first exclude pattern
    /// that does not compile.
    pub fn new(test: &TestConfig) -> Result<Self, ConfigError> {
        let exclude_globs = test
            .exclude
            .iter()
            .map(|pattern| {
                wax::Glob::new(pattern)
                    .map(wax::Glob::into_owned)
                    .map_err(|e| ConfigError::InvalidGlob {
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            exclude: test.exclude.clone(),
            exclude_globs,
            environment: test.environment.clone(),
            test_transform_mode: TestTransformMode {
                web: vec![WEB_TRANSFORM_PATTERN.to_string()],
            },
            threads: false,
            isolate: false,
            globals: true,
            setup_files: test.setup_files.clone(),
        })
    }

    #[must_use]
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    #[must_use]
    pub fn setup_files(&self) -> &[String] {
        &self.setup_files
    }

    /// Tests run in one process.
    #[must_use]
    pub const fn threads(&self) -> bool {
        self.threads
    }

    /// Test files share module state.
    #[must_use]
    pub const fn isolate(&self) -> bool {
        self.isolate
    }

    /// Whether the runner skips `path` (relative, `/`-separated).
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.exclude_globs.iter().any(|glob| glob.is_match(path))
    }
}

// The compiled globs are derived from `exclude` and take no part in equality.
impl PartialEq for TestProfile {
    fn eq(&self, other: &Self) -> bool {
        self.exclude == other.exclude
            && self.environment == other.environment
            && self.test_transform_mode == other.test_transform_mode
            && self.threads == other.threads
            && self.isolate == other.isolate
            && self.globals == other.globals
            && self.setup_files == other.setup_files
    }
}

impl Eq for TestProfile {}
