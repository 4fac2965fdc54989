// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module alias table handed to the bundler's resolver.
//!
//! ```text
//! own variant:  rxcore, solid-js/jsx-runtime, solid-js/web,
//!               solid-js/store, solid-js  (rooted at variant path)
//!               + supplementary (never overriding the above)
//! upstream:     supplementary only
//! ```
//!
//! Entries keep insertion order; the bundler takes the first matching key,
//! so `solid-js/web` has to come before `solid-js`. Inner paths are not
//! checked here; a bad one fails at module resolution time.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::FrameworkVariant;

/// Library specifiers remapped onto the own variant, with their paths
/// relative to the variant root. Most specific first.
pub const FRAMEWORK_SPECIFIERS: [(&str, &str); 5] = [
    ("rxcore", "web/core"),
    ("solid-js/jsx-runtime", "jsx"),
    ("solid-js/web", "web"),
    ("solid-js/store", "store"),
    ("solid-js", ""),
];

/// Specifier → filesystem path, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable(IndexMap<String, PathBuf>);

impl AliasTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for `variant`.
    ///
    /// `supplementary` paths are joined onto `root`.
    #[must_use]
    pub fn build(
        variant: &FrameworkVariant,
        root: &Path,
        supplementary: &IndexMap<String, PathBuf>,
    ) -> Self {
        let mut table = Self::new();

        if variant.use_own() {
            for (specifier, inner) in FRAMEWORK_SPECIFIERS {
                let path = if inner.is_empty() {
                    variant.path().to_path_buf()
                } else {
                    variant.path().join(inner)
                };
                table.0.insert(specifier.to_string(), path);
            }
        }

        for (specifier, path) in supplementary {
            table
                .0
                .entry(specifier.clone())
                .or_insert_with(|| root.join(path));
        }

        table
    }

    #[must_use]
    pub fn get(&self, specifier: &str) -> Option<&Path> {
        self.0.get(specifier).map(PathBuf::as_path)
    }

    #[must_use]
    pub fn contains(&self, specifier: &str) -> bool {
        self.0.contains_key(specifier)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    /// Resolve an import specifier the way the bundler applies the table:
    /// the first key equal to `specifier`, or a prefix of it followed by `/`.
    #[must_use]
    pub fn resolve(&self, specifier: &str) -> Option<PathBuf> {
        self.0.iter().find_map(|(key, path)| {
            if specifier == key {
                Some(path.clone())
            } else {
                specifier
                    .strip_prefix(key.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|rest| path.join(rest))
            }
        })
    }
}
