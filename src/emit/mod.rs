// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration object handed to the bundler.
//!
//! ```text
//! BuildContext ──┬──> plugin::pipeline ─────> plugins
//!                ├──> framework::resolve ──> resolve.alias
//!                ├──> ProxyRouter::standard ─> server.proxy
//!                ├──> [test] ──────────────> test (flag independent)
//!                └──> FeatureFlags ────────> build.minify, define.__DEV__
//!
//!   SourcemapIgnore (one Arc)
//!        ├──> server.sourcemapIgnoreList
//!        └──> build.rollupOptions.output.sourcemapIgnoreList
//! ```
//!
//! Field names follow the bundler's camelCase keys so the object can be
//! serialized straight to JSON.

pub mod test_profile;


use anyhow::Context;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::debug;

use crate::context::{BuildContext, FeatureFlags};
use crate::error::Result;
use crate::framework::alias::AliasTable;
use crate::framework::{self, FrameworkVariant};
use crate::plugin::{Plugin, pipeline};
use crate::proxy::{ProxyRouter, SourcemapIgnore};

pub use test_profile::TestProfile;

/// Language level of the emitted bundle.
pub const BUILD_TARGET: &str = "es2020";

/// Minifier selection; serialized as `false` or the minifier name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minify {
    Disabled,
    Esbuild,
}

impl Serialize for Minify {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Esbuild => serializer.serialize_str("esbuild"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOptions {
    pub port: u16,
    pub proxy: ProxyRouter,
    pub sourcemap_ignore_list: Arc<SourcemapIgnore>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    pub sourcemap_ignore_list: Arc<SourcemapIgnore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RollupOptions {
    pub output: OutputOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildOptions {
    pub target: &'static str,
    pub sourcemap: bool,
    pub assets_dir: String,
    pub copy_public_dir: bool,
    pub empty_out_dir: bool,
    pub minify: Minify,
    pub rollup_options: RollupOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkerOptions {
    pub format: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostcssOptions {
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssOptions {
    pub dev_sourcemap: bool,
    pub postcss: PostcssOptions,
}

/// Compile-time constant replacements. Values are source snippets.
#[derive(Debug, Clone, Serialize)]
pub struct DefineOptions {
    pub global: String,
    #[serde(rename = "__DEV__")]
    pub dev: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveOptions {
    pub alias: AliasTable,
}

/// The complete bundler configuration.
#[derive(Debug, Clone, Serialize)]
pub struct BuildConfig {
    pub base: String,
    pub plugins: Vec<Plugin>,
    pub test: TestProfile,
    pub server: ServerOptions,
    pub build: BuildOptions,
    pub worker: WorkerOptions,
    pub css: CssOptions,
    pub define: DefineOptions,
    pub resolve: ResolveOptions,
}

impl BuildConfig {
    /// Assemble the configuration for an already resolved variant.
    ///
    /// # Errors
    ///
    /// Fails if a plugin cannot be constructed, a test exclude glob or a
    /// proxy rewrite does not compile.
    pub fn compose(ctx: &BuildContext, variant: &FrameworkVariant) -> Result<Self> {
        let config = ctx.config();
        let plugins = pipeline::compose(ctx)?;
        let test = TestProfile::new(&config.test)?;
        let proxy = ProxyRouter::standard()?;
        let sourcemap_ignore = SourcemapIgnore::shared();
        let alias = AliasTable::build(variant, ctx.root(), &config.framework.aliases);

        let minify = if ctx.flags().contains(FeatureFlags::SKIP_MINIFICATION) {
            Minify::Disabled
        } else {
            Minify::Esbuild
        };

        debug!(
            plugins = plugins.len(),
            aliases = alias.len(),
            ?minify,
            "configuration composed"
        );

        Ok(Self {
            base: config.project.base.clone(),
            plugins,
            test,
            server: ServerOptions {
                port: config.project.port,
                proxy,
                sourcemap_ignore_list: Arc::clone(&sourcemap_ignore),
            },
            build: BuildOptions {
                target: BUILD_TARGET,
                sourcemap: false,
                assets_dir: String::new(),
                copy_public_dir: false,
                empty_out_dir: true,
                minify,
                rollup_options: RollupOptions {
                    output: OutputOptions {
                        sourcemap_ignore_list: sourcemap_ignore,
                    },
                },
            },
            worker: WorkerOptions { format: "es" },
            css: CssOptions {
                dev_sourcemap: false,
                postcss: PostcssOptions {
                    plugins: vec!["autoprefixer".to_string()],
                },
            },
            define: DefineOptions {
                global: "globalThis".to_string(),
                dev: ctx.is_development().to_string(),
            },
            resolve: ResolveOptions { alias },
        })
    }

    /// Render as JSON, pretty-printed unless `compact`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)
        } else {
            serde_json::to_string_pretty(self)
        };
        json.context("failed to serialize configuration")
    }
}

/// Resolve the framework variant on disk and assemble the configuration.
///
/// # Errors
///
/// See [`BuildConfig::compose`].
pub fn emit(ctx: &BuildContext) -> Result<BuildConfig> {
    let variant = framework::resolve(ctx);
    BuildConfig::compose(ctx, &variant)
}
