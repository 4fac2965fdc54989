// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Path fragments treated as infrastructure rather than application code.
pub const IGNORED_SEGMENTS: [&str; 3] = ["node_modules", "logger", "eventListenerBase"];

/// Decides which sources are left out of source-map based debugging.
///
/// One instance is shared (behind an [`Arc`]) by the dev server and the
/// production map writer so both ignore the same files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcemapIgnore {
    segments: Vec<String>,
}

impl Default for SourcemapIgnore {
    fn default() -> Self {
        Self {
            segments: IGNORED_SEGMENTS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl SourcemapIgnore {
    /// Shared handle to the default predicate.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Whether `source_path` is ignored. The generated map path does not
    /// take part in the decision.
    #[must_use]
    pub fn ignores(&self, source_path: &str, _sourcemap_path: &str) -> bool {
        self.segments
            .iter()
            .any(|segment| source_path.contains(segment.as_str()))
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Serialize for SourcemapIgnore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.segments.serialize(serializer)
    }
}
