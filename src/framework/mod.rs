// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! UI library variant resolution.
//!
//! ```text
//! prefer_source? ──yes──> candidate = root/source_path
//!       | no
//!       v
//! candidate = root/prebuilt_path
//!       |
//!       v
//! exists(candidate)? ──yes──> own variant at candidate
//!       | no
//!       v
//! upstream package (NO fallback to the other tree)
//! ```
//!
//! The missing fallback is deliberate: flipping `framework.prefer_source`
//! without the matching tree on disk switches back to the upstream package,
//! even when the other tree is present.

pub mod alias;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::types::FrameworkConfig;
use crate::context::{BuildContext, FeatureFlags};

/// Which tree supplies the UI library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// Source checkout of the library.
    Source,
    /// Prebuilt artifact tree.
    Prebuilt,
}

impl std::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => write!(f, "source"),
            Self::Prebuilt => write!(f, "prebuilt"),
        }
    }
}

/// Answers filesystem existence questions for the resolver.
pub trait PathLookup {
    fn exists(&self, path: &Path) -> bool;
}

/// [`PathLookup`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLookup;

impl PathLookup for FsLookup {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Outcome of variant resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkVariant {
    kind: VariantKind,
    path: PathBuf,
    present: bool,
}

impl FrameworkVariant {
    /// Preferred kind, whether or not its tree exists.
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        self.kind
    }

    /// Candidate path chosen from the preference alone.
    ///
    /// Only meaningful when [`use_own`](Self::use_own) is true.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the own variant is used instead of the upstream package.
    #[must_use]
    pub const fn use_own(&self) -> bool {
        self.present
    }

    /// Human-readable description of the selected mode.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.present {
            format!("using own solid ({}) at {}", self.kind, self.path.display())
        } else {
            format!(
                "using original solid ({} tree not found at {})",
                self.kind,
                self.path.display()
            )
        }
    }
}

/// Pick the candidate tree from the preference alone and check it exists.
#[must_use]
pub fn resolve_variant(
    root: &Path,
    framework: &FrameworkConfig,
    prefer_source: bool,
    lookup: &dyn PathLookup,
) -> FrameworkVariant {
    let (kind, relative) = if prefer_source {
        (VariantKind::Source, &framework.source_path)
    } else {
        (VariantKind::Prebuilt, &framework.prebuilt_path)
    };
    let path = root.join(relative);
    let present = lookup.exists(&path);

    let variant = FrameworkVariant {
        kind,
        path,
        present,
    };
    if variant.present {
        info!(kind = %kind, path = %variant.path.display(), "using own solid");
    } else {
        info!(kind = %kind, path = %variant.path.display(), "using original solid");
    }
    variant
}

/// Resolve the variant for a build context using the real filesystem.
#[must_use]
pub fn resolve(ctx: &BuildContext) -> FrameworkVariant {
    resolve_variant(
        ctx.root(),
        &ctx.config().framework,
        ctx.flags().contains(FeatureFlags::PREFER_FRAMEWORK_SOURCE),
        &FsLookup,
    )
}
