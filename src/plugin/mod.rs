// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundler plugin descriptors.
//!
//! ```text
//! Plugin (serialized as { "name": <package>, ...options })
//!   Checker      vite-plugin-checker       typescript + eslint
//!   Solid        vite-plugin-solid
//!   Handlebars   vite-plugin-handlebars    page metadata context
//!   BasicSsl     @vitejs/plugin-basic-ssl  optional certificate params
//!   Visualizer   rollup-plugin-visualizer  gzip sizes, treemap
//! ```
//!
//! The bundler instantiates the actual plugins from these descriptors.

pub mod pipeline;


use serde::Serialize;
use std::path::PathBuf;

use crate::config::types::PageConfig;

/// Options of the type/lint checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerOptions {
    pub typescript: bool,
    pub eslint: EslintOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EslintOptions {
    pub lint_command: String,
    pub use_flat_config: bool,
}

/// Certificate parameters for the TLS plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslCertificates {
    pub name: String,
    pub cert_dir: PathBuf,
}

/// Options of the bundle visualizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizerOptions {
    pub gzip_size: bool,
    pub template: String,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            gzip_size: true,
            template: "treemap".to_string(),
        }
    }
}

/// A configured plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name")]
pub enum Plugin {
    #[serde(rename = "vite-plugin-checker")]
    Checker(CheckerOptions),
    #[serde(rename = "vite-plugin-solid")]
    Solid,
    #[serde(rename = "vite-plugin-handlebars")]
    Handlebars { context: PageConfig },
    /// Without certificate parameters the plugin generates a self-signed pair.
    #[serde(rename = "@vitejs/plugin-basic-ssl")]
    BasicSsl {
        #[serde(skip_serializing_if = "Option::is_none")]
        config: Option<SslCertificates>,
    },
    #[serde(rename = "rollup-plugin-visualizer")]
    Visualizer(VisualizerOptions),
}

impl Plugin {
    /// Package name of the plugin.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Checker(_) => "vite-plugin-checker",
            Self::Solid => "vite-plugin-solid",
            Self::Handlebars { .. } => "vite-plugin-handlebars",
            Self::BasicSsl { .. } => "@vitejs/plugin-basic-ssl",
            Self::Visualizer(_) => "rollup-plugin-visualizer",
        }
    }
}
