// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::alias::{AliasTable, FRAMEWORK_SPECIFIERS};
use super::{FsLookup, PathLookup, VariantKind, resolve_variant};
use crate::config::types::FrameworkConfig;
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Lookup that only knows about a fixed set of paths.
struct FakeLookup(BTreeSet<PathBuf>);

impl FakeLookup {
    fn with(paths: &[PathBuf]) -> Self {
        Self(paths.iter().cloned().collect())
    }
}

impl PathLookup for FakeLookup {
    fn exists(&self, path: &Path) -> bool {
        self.0.contains(path)
    }
}

fn root() -> PathBuf {
    PathBuf::from("/srv/webk")
}

fn source_path() -> PathBuf {
    root().join("src/solid/packages/solid")
}

fn prebuilt_path() -> PathBuf {
    root().join("src/vendor/solid")
}

#[test]
fn test_variant_matrix() {
    let framework = FrameworkConfig::default();

    for prefer_source in [false, true] {
        for source_exists in [false, true] {
            for prebuilt_exists in [false, true] {
                let mut present = Vec::new();
                if source_exists {
                    present.push(source_path());
                }
                if prebuilt_exists {
                    present.push(prebuilt_path());
                }
                let lookup = FakeLookup::with(&present);

                let variant = resolve_variant(&root(), &framework, prefer_source, &lookup);

                let (expected_path, expected_present) = if prefer_source {
                    (source_path(), source_exists)
                } else {
                    (prebuilt_path(), prebuilt_exists)
                };
                assert_eq!(variant.path(), expected_path, "prefer_source={prefer_source}");
                assert_eq!(
                    variant.use_own(),
                    expected_present,
                    "prefer_source={prefer_source} source={source_exists} prebuilt={prebuilt_exists}"
                );
            }
        }
    }
}

#[test]
fn test_prebuilt_preferred_and_present() {
    let lookup = FakeLookup::with(&[prebuilt_path()]);
    let variant = resolve_variant(&root(), &FrameworkConfig::default(), false, &lookup);

    assert!(variant.use_own());
    assert_eq!(variant.kind(), VariantKind::Prebuilt);
    assert_eq!(variant.path(), prebuilt_path());
}

#[test]
fn test_missing_source_does_not_fall_back_to_prebuilt() {
    let lookup = FakeLookup::with(&[prebuilt_path()]);
    let variant = resolve_variant(&root(), &FrameworkConfig::default(), true, &lookup);

    assert!(!variant.use_own());
    assert_eq!(variant.kind(), VariantKind::Source);
    assert_eq!(variant.path(), source_path());
    assert!(variant.describe().starts_with("using original solid"));
}

#[test]
fn test_fs_lookup_against_real_tree() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("src/vendor/solid")).unwrap();

    let variant = resolve_variant(temp.path(), &FrameworkConfig::default(), false, &FsLookup);
    assert!(variant.use_own());

    let variant = resolve_variant(temp.path(), &FrameworkConfig::default(), true, &FsLookup);
    assert!(!variant.use_own());
}

#[test]
fn test_alias_table_with_own_variant() {
    let framework = FrameworkConfig::default();
    let lookup = FakeLookup::with(&[prebuilt_path()]);
    let variant = resolve_variant(&root(), &framework, false, &lookup);

    let table = AliasTable::build(&variant, &root(), &framework.aliases);

    let keys: Vec<_> = table.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        [
            "rxcore",
            "solid-js/jsx-runtime",
            "solid-js/web",
            "solid-js/store",
            "solid-js",
            "solid-transition-group",
        ]
    );
    assert_eq!(table.get("rxcore"), Some(prebuilt_path().join("web/core").as_path()));
    assert_eq!(table.get("solid-js"), Some(prebuilt_path().as_path()));
    assert_eq!(
        table.get("solid-transition-group"),
        Some(root().join("src/vendor/solid-transition-group").as_path())
    );
}

#[test]
fn test_alias_table_with_upstream() {
    let framework = FrameworkConfig::default();
    let variant = resolve_variant(&root(), &framework, false, &FakeLookup::with(&[]));

    let table = AliasTable::build(&variant, &root(), &framework.aliases);

    assert_eq!(table.len(), 1);
    assert!(table.contains("solid-transition-group"));
    for (specifier, _) in FRAMEWORK_SPECIFIERS {
        assert!(!table.contains(specifier), "{specifier} should be absent");
    }
}

#[test]
fn test_alias_table_empty_supplementary() {
    let variant = resolve_variant(
        &root(),
        &FrameworkConfig::default(),
        false,
        &FakeLookup::with(&[]),
    );
    let table = AliasTable::build(&variant, &root(), &IndexMap::new());
    assert!(table.is_empty());
    assert_eq!(serde_json::to_string(&table).unwrap(), "{}");
}

#[test]
fn test_framework_entries_win_collisions() {
    let mut supplementary = IndexMap::new();
    supplementary.insert("solid-js".to_string(), PathBuf::from("elsewhere"));
    let variant = resolve_variant(
        &root(),
        &FrameworkConfig::default(),
        false,
        &FakeLookup::with(&[prebuilt_path()]),
    );

    let table = AliasTable::build(&variant, &root(), &supplementary);

    assert_eq!(table.len(), FRAMEWORK_SPECIFIERS.len());
    assert_eq!(table.get("solid-js"), Some(prebuilt_path().as_path()));
}

#[test]
fn test_resolve_specifier_order() {
    let framework = FrameworkConfig::default();
    let variant = resolve_variant(
        &root(),
        &framework,
        false,
        &FakeLookup::with(&[prebuilt_path()]),
    );
    let table = AliasTable::build(&variant, &root(), &framework.aliases);

    assert_eq!(
        table.resolve("solid-js/web"),
        Some(prebuilt_path().join("web"))
    );
    assert_eq!(
        table.resolve("solid-js/html"),
        Some(prebuilt_path().join("html"))
    );
    assert_eq!(table.resolve("solid-jsx"), None);
    assert_eq!(table.resolve("react"), None);
}
