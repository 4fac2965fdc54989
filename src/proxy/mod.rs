// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dev-server proxy rules.
//!
//! ```text
//! request path
//!      |
//!      v
//! rules in insertion order, first prefix match wins
//!   /api ──> https://api.telegram.org     rewrite ^/api -> /api
//!   /v1  ──> https://v1.web.telegram.org  path unchanged
//!      |
//!      v
//! target + (rewritten) path
//! ```
//!
//! Forwarding itself is done by the dev server's HTTP proxy; only the rule
//! data lives here.

pub mod sourcemap;


use regex::Regex;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::ConfigError;

pub use sourcemap::SourcemapIgnore;

/// Regex-based rewrite of the forwarded path.
#[derive(Debug, Clone)]
pub struct PathRewrite {
    pattern: Regex,
    replacement: String,
}

impl PathRewrite {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|e| ConfigError::InvalidValue {
            section: "proxy".to_string(),
            key: "rewrite".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Replace the first match in `path`.
    #[must_use]
    pub fn apply(&self, path: &str) -> String {
        self.pattern
            .replacen(path, 1, self.replacement.as_str())
            .into_owned()
    }
}

impl Serialize for PathRewrite {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("PathRewrite", 2)?;
        s.serialize_field("from", self.pattern.as_str())?;
        s.serialize_field("to", &self.replacement)?;
        s.end()
    }
}

/// One forwarding rule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    #[serde(skip)]
    prefix: String,
    target: String,
    /// Rewrite the `Origin`/`Host` headers to the target.
    change_origin: bool,
    /// Verify the upstream TLS certificate.
    secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    rewrite: Option<PathRewrite>,
}

impl ProxyRule {
    /// Rule forwarding `prefix` to `target` with origin rewriting on and
    /// certificate verification off.
    #[must_use]
    pub fn new(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            target: target.into(),
            change_origin: true,
            secure: false,
            rewrite: None,
        }
    }

    #[must_use]
    pub fn with_rewrite(mut self, rewrite: PathRewrite) -> Self {
        self.rewrite = Some(rewrite);
        self
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn change_origin(&self) -> bool {
        self.change_origin
    }

    #[must_use]
    pub const fn secure(&self) -> bool {
        self.secure
    }

    #[must_use]
    pub const fn rewrite(&self) -> Option<&PathRewrite> {
        self.rewrite.as_ref()
    }

    /// Plain prefix test, as the dev server does it (`/apiary` matches `/api`).
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    /// Path sent upstream.
    #[must_use]
    pub fn forwarded_path(&self, path: &str) -> String {
        self.rewrite
            .as_ref()
            .map_or_else(|| path.to_string(), |rewrite| rewrite.apply(path))
    }

    /// Full upstream URL for `path`.
    #[must_use]
    pub fn forward_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.target.trim_end_matches('/'),
            self.forwarded_path(path)
        )
    }
}

/// Ordered proxy rule set.
#[derive(Debug, Clone, Default)]
pub struct ProxyRouter {
    rules: Vec<ProxyRule>,
}

impl ProxyRouter {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The development rule set for the messaging API origins.
    ///
    /// # Errors
    ///
    /// Returns an error if a rewrite pattern fails to compile.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::new()
            .rule(
                ProxyRule::new("/api", "https://api.telegram.org")
                    .with_rewrite(PathRewrite::new("^/api", "/api")?),
            )
            .rule(ProxyRule::new("/v1", "https://v1.web.telegram.org")))
    }

    /// Append a rule. Later rules only see paths earlier ones did not match.
    #[must_use]
    pub fn rule(mut self, rule: ProxyRule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[ProxyRule] {
        &self.rules
    }

    /// First rule whose prefix matches `path`.
    #[must_use]
    pub fn route(&self, path: &str) -> Option<&ProxyRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }

    /// Upstream URL for `path`, or `None` when no rule applies.
    #[must_use]
    pub fn forward(&self, path: &str) -> Option<String> {
        self.route(path).map(|rule| rule.forward_url(path))
    }
}

impl Serialize for ProxyRouter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(rule.prefix(), rule)?;
        }
        map.end()
    }
}
