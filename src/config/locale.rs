//! Locale identifiers and per-locale overlays.
//!
//! Locales are declared as `[locales.<id>]` tables. The `root` key names
//! the default locale, served at `/`; every other locale is served under
//! `/<id>/` unless its overlay sets an explicit `link`.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "English"
//!
//! [locales.zh]
//! label = "简体中文"
//! lang = "zh-CN"
//! title = "EgLib 文档"
//! ```

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::theme::ThemeOverlay;
use crate::types::ConfigError;

// ============================================================================
// Locale identifiers
// ============================================================================

/// A validated locale identifier, usable as a URL path segment.
///
/// Identifiers start with an ASCII letter or digit and may contain ASCII
/// letters, digits, `-` and `_`. Construction via [`LocaleId::new`] (or
/// deserialization) enforces this, so a held `LocaleId` is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct LocaleId(String);

impl LocaleId {
    /// Key of the default locale.
    pub const ROOT: &'static str = "root";

    /// Validate and wrap a locale identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        match Self::check(&id) {
            None => Ok(Self(id)),
            Some(reason) => Err(ConfigError::InvalidLocaleId { id, reason }),
        }
    }

    /// The default locale identifier.
    pub fn root() -> Self {
        Self(Self::ROOT.to_owned())
    }

    /// Check if this is the default locale.
    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link prefix used when the overlay does not set one: `/` for the
    /// default locale, `/<id>/` for every other.
    pub fn default_link(&self) -> String {
        if self.is_root() {
            "/".to_owned()
        } else {
            format!("/{}/", self.0)
        }
    }

    fn check(id: &str) -> Option<&'static str> {
        let mut chars = id.chars();
        let Some(first) = chars.next() else {
            return Some("must not be empty");
        };
        if !first.is_ascii_alphanumeric() {
            return Some("must start with an ASCII letter or digit");
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Some("may only contain ASCII letters, digits, `-` and `_`");
        }
        None
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Enables `&str` lookups in maps keyed by `LocaleId`.
impl Borrow<str> for LocaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocaleId {
    type Error = ConfigError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

// ============================================================================
// Per-locale overlays
// ============================================================================

/// Per-locale overrides layered over the shared `[site]` and `[theme]`
/// sections.
///
/// Every field is optional; an absent field inherits the shared value.
/// See the crate docs for the exact merge rule of each field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleOverlay {
    /// Display name in the locale switcher, e.g. `"简体中文"`.
    pub label: Option<String>,

    /// BCP 47 tag for the `<html lang>` attribute.
    pub lang: Option<String>,

    /// Link prefix for this locale's pages. Defaults to `/` for `root`
    /// and `/<id>/` otherwise.
    pub link: Option<String>,

    /// Site title override. An empty string falls back to the shared title.
    pub title: Option<String>,

    /// Site description override.
    pub description: Option<String>,

    /// Replacement for the shared `site.extra` table. Replaces the whole
    /// table when present; the two are never merged key-by-key.
    pub extra: Option<IndexMap<String, toml::Value>>,

    /// Theme overrides for this locale.
    pub theme: ThemeOverlay,
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};

    #[test]
    fn test_valid_ids() {
        for id in ["root", "zh", "zh-Hans", "pt_BR", "en2", "2col"] {
            assert!(LocaleId::new(id).is_ok(), "`{id}` should be accepted");
        }
    }

    #[test]
    fn test_invalid_ids() {
        for (id, reason) in [
            ("", "must not be empty"),
            ("..", "must start with an ASCII letter or digit"),
            ("-zh", "must start with an ASCII letter or digit"),
            ("_zh", "must start with an ASCII letter or digit"),
            ("zh/extra", "may only contain ASCII letters, digits, `-` and `_`"),
            ("zh CN", "may only contain ASCII letters, digits, `-` and `_`"),
            ("中文", "must start with an ASCII letter or digit"),
        ] {
            match LocaleId::new(id) {
                Err(ConfigError::InvalidLocaleId { id: got, reason: got_reason }) => {
                    assert_eq!(got, id);
                    assert_eq!(got_reason, reason);
                }
                other => panic!("`{id}` should be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_default_link() {
        assert_eq!(LocaleId::root().default_link(), "/");
        assert_eq!(LocaleId::new("zh").unwrap().default_link(), "/zh/");
        assert!(LocaleId::root().is_root());
        assert!(!LocaleId::new("zh").unwrap().is_root());
    }

    #[test]
    fn test_overlay_defaults() {
        let config = test_parse_config("[locales.zh]\nlabel = \"简体中文\"");
        let overlay = &config.locales["zh"];
        assert_eq!(overlay.label.as_deref(), Some("简体中文"));
        assert_eq!(overlay.lang, None);
        assert_eq!(overlay.link, None);
        assert_eq!(overlay.title, None);
        assert_eq!(overlay.extra, None);
        assert_eq!(overlay.theme, ThemeOverlay::default());
    }

    #[test]
    fn test_invalid_locale_key_rejected() {
        let result = SiteConfig::from_str(
            "[site]\ntitle = \"Test\"\n\n[locales.\"zh/extra\"]\nlabel = \"bad\"",
        );
        // surfaces as a TOML deserialization error carrying the id message
        let err = result.unwrap_err();
        assert!(err.to_string().contains("parsing error"), "got: {err}");
    }

    #[test]
    fn test_extra_replaces_whole_table() {
        let config = test_parse_config(
            r#"[site.extra]
repo = "eglib/eglib"
edit_links = true

[locales.zh.extra]
repo = "eglib/eglib-zh"
"#,
        );
        let extra = config.locales["zh"].extra.as_ref().unwrap();
        assert_eq!(extra.len(), 1);
        assert_eq!(
            extra["repo"],
            toml::Value::String("eglib/eglib-zh".to_owned())
        );
    }
}
