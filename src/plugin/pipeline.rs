// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Conditional plugin assembly.
//!
//! ```text
//! slot          requires          unless
//! checker       -                 TEST_RUN
//! solid         -                 -
//! handlebars    -                 -
//! basic-ssl     TLS               -
//! visualizer    ANALYZE_BUNDLE    -
//!
//! plan():    slot order, None for omitted slots
//! compose(): run factories of enabled slots, drop the Nones
//! ```
//!
//! Factory errors are returned as-is; a plugin that cannot be built stops
//! the configuration build.

use tracing::debug;

use super::{CheckerOptions, EslintOptions, Plugin, SslCertificates, VisualizerOptions};
use crate::context::{BuildContext, FeatureFlags};
use crate::error::PluginError;

/// Builds one plugin from the context.
pub type PluginFactory = fn(&BuildContext) -> Result<Plugin, PluginError>;

/// A position in the pipeline with its inclusion rule.
#[derive(Debug, Clone, Copy)]
pub struct PluginSlot {
    name: &'static str,
    requires: FeatureFlags,
    unless: FeatureFlags,
    factory: PluginFactory,
}

impl PluginSlot {
    /// Slot that is always enabled.
    #[must_use]
    pub const fn new(name: &'static str, factory: PluginFactory) -> Self {
        Self {
            name,
            requires: FeatureFlags::empty(),
            unless: FeatureFlags::empty(),
            factory,
        }
    }

    /// Only enable the slot when all of `flags` are set.
    #[must_use]
    pub const fn requires(mut self, flags: FeatureFlags) -> Self {
        self.requires = flags;
        self
    }

    /// Disable the slot when any of `flags` is set.
    #[must_use]
    pub const fn unless(mut self, flags: FeatureFlags) -> Self {
        self.unless = flags;
        self
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn enabled(&self, flags: FeatureFlags) -> bool {
        flags.contains(self.requires) && !flags.intersects(self.unless)
    }
}

/// Ordered list of plugin slots.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    slots: Vec<PluginSlot>,
}

impl Pipeline {
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// The pipeline used for the web client.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .slot(PluginSlot::new("checker", checker).unless(FeatureFlags::TEST_RUN))
            .slot(PluginSlot::new("solid", |_| Ok(Plugin::Solid)))
            .slot(PluginSlot::new("handlebars", handlebars))
            .slot(PluginSlot::new("basic-ssl", basic_ssl).requires(FeatureFlags::TLS))
            .slot(
                PluginSlot::new("visualizer", |_| {
                    Ok(Plugin::Visualizer(VisualizerOptions::default()))
                })
                .requires(FeatureFlags::ANALYZE_BUNDLE),
            )
    }

    #[must_use]
    pub fn slot(mut self, slot: PluginSlot) -> Self {
        self.slots.push(slot);
        self
    }

    #[must_use]
    pub fn slots(&self) -> &[PluginSlot] {
        &self.slots
    }

    /// Slot names in order, `None` where a slot is omitted under `flags`.
    #[must_use]
    pub fn plan(&self, flags: FeatureFlags) -> Vec<Option<&'static str>> {
        self.slots
            .iter()
            .map(|slot| slot.enabled(flags).then_some(slot.name))
            .collect()
    }

    /// Build the enabled plugins in slot order.
    ///
    /// # Errors
    ///
    /// Returns the first factory error.
    pub fn compose(&self, ctx: &BuildContext) -> Result<Vec<Plugin>, PluginError> {
        let flags = ctx.flags();
        let entries = self
            .slots
            .iter()
            .map(|slot| {
                if slot.enabled(flags) {
                    (slot.factory)(ctx).map(Some)
                } else {
                    debug!(plugin = slot.name, "plugin omitted");
                    Ok(None)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries.into_iter().flatten().collect())
    }
}

/// Compose the standard pipeline for `ctx`.
///
/// # Errors
///
/// See [`Pipeline::compose`].
pub fn compose(ctx: &BuildContext) -> Result<Vec<Plugin>, PluginError> {
    Pipeline::standard().compose(ctx)
}

fn checker(ctx: &BuildContext) -> Result<Plugin, PluginError> {
    let checker = &ctx.config().checker;
    let glob = checker.lint_glob.trim_start_matches("./");
    wax::Glob::new(glob).map_err(|e| PluginError::ConstructionFailed {
        name: "vite-plugin-checker".to_string(),
        message: format!("invalid lint glob '{}': {e}", checker.lint_glob),
    })?;

    let mut lint_command = format!("eslint \"{}\"", checker.lint_glob);
    if !checker.ignore_pattern.is_empty() {
        lint_command.push_str(&format!(" --ignore-pattern \"{}\"", checker.ignore_pattern));
    }

    Ok(Plugin::Checker(CheckerOptions {
        typescript: checker.typescript,
        eslint: EslintOptions {
            lint_command,
            use_flat_config: checker.use_flat_config,
        },
    }))
}

fn handlebars(ctx: &BuildContext) -> Result<Plugin, PluginError> {
    Ok(Plugin::Handlebars {
        context: ctx.config().page.clone(),
    })
}

fn basic_ssl(ctx: &BuildContext) -> Result<Plugin, PluginError> {
    let config = ctx
        .flags()
        .contains(FeatureFlags::TLS | FeatureFlags::TLS_CERTIFICATES)
        .then(|| SslCertificates {
            name: ctx.config().tls.name.clone(),
            cert_dir: ctx.config().tls.cert_dir.clone(),
        });
    Ok(Plugin::BasicSsl { config })
}
