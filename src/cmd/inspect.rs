// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only inspection commands: `resolve`, `plugins`, `proxy`.

use crate::context::BuildContext;
use crate::error::Result;
use crate::framework::alias::AliasTable;
use crate::framework::{self, FrameworkVariant};
use crate::plugin::pipeline::Pipeline;
use crate::proxy::ProxyRouter;

/// Lines describing the variant and its alias table.
#[must_use]
pub fn format_resolution(ctx: &BuildContext, variant: &FrameworkVariant) -> Vec<String> {
    let table = AliasTable::build(variant, ctx.root(), &ctx.config().framework.aliases);

    let mut lines = vec![variant.describe()];
    if table.is_empty() {
        lines.push("no aliases".to_string());
        return lines;
    }

    let width = table.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    lines.extend(
        table
            .iter()
            .map(|(key, path)| format!("{key:<width$} -> {}", path.display())),
    );
    lines
}

/// Main handler for the resolve command.
pub fn run_resolve_command(ctx: &BuildContext) {
    let variant = framework::resolve(ctx);
    for line in format_resolution(ctx, &variant) {
        println!("{line}");
    }
}

/// One line per pipeline slot, marking omitted ones.
///
/// # Errors
///
/// Returns an error if an enabled plugin cannot be constructed.
pub fn format_plugins(ctx: &BuildContext) -> Result<Vec<String>> {
    let pipeline = Pipeline::standard();
    let mut plugins = pipeline.compose(ctx)?.into_iter();

    Ok(pipeline
        .plan(ctx.flags())
        .into_iter()
        .zip(pipeline.slots())
        .map(|(entry, slot)| match entry {
            Some(_) => plugins.next().map_or_else(
                || format!("+ {}", slot.name()),
                |plugin| format!("+ {:<12} {}", slot.name(), plugin.name()),
            ),
            None => format!("- {:<12} (omitted)", slot.name()),
        })
        .collect())
}

/// Main handler for the plugins command.
///
/// # Errors
///
/// See [`format_plugins`].
pub fn run_plugins_command(ctx: &BuildContext) -> Result<()> {
    for line in format_plugins(ctx)? {
        println!("{line}");
    }
    Ok(())
}

/// Describe how the dev server handles `path`.
///
/// # Errors
///
/// Returns an error if the standard rules fail to build.
pub fn format_proxy(path: &str) -> Result<String> {
    let router = ProxyRouter::standard()?;
    Ok(match router.route(path) {
        Some(rule) => format!(
            "{path} -> {} (rule {})",
            rule.forward_url(path),
            rule.prefix()
        ),
        None => format!("{path} -> served locally"),
    })
}

/// Main handler for the proxy command.
///
/// # Errors
///
/// See [`format_proxy`].
pub fn run_proxy_command(path: &str) -> Result<()> {
    println!("{}", format_proxy(path)?);
    Ok(())
}
