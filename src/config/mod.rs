//! Site configuration for locale-aware documentation sites.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── locale     # [locales.<id>] overlays, LocaleId
//! ├── sidebar    # Sidebar trees (raw entries, checked items)
//! ├── site       # [site] shared metadata
//! ├── theme      # [theme] shared settings, per-locale overlays
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[site]`         | Shared metadata (title, description, lang, extra)|
//! | `[theme]`        | Shared theme settings (sidebar)                  |
//! | `[locales.<id>]` | Per-locale overrides, layered over the above     |
//!
//! Parsing alone never fails on semantic problems; call
//! [`SiteConfig::resolve`] to check the document and obtain the merged
//! per-locale view.

pub mod locale;
pub mod sidebar;
pub mod site;
pub mod theme;

pub use locale::{LocaleId, LocaleOverlay};
pub use sidebar::{SidebarEntry, SidebarItem};
pub use site::SiteInfoConfig;
pub use theme::{DocFooterConfig, ThemeConfig, ThemeOverlay};

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedSite;
use crate::types::ConfigError;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing the site config file.
///
/// Locales keep their declaration order; resolution iterates them in the
/// same order, so output (and serialized JSON) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shared site metadata
    pub site: SiteInfoConfig,

    /// Shared theme settings
    pub theme: ThemeConfig,

    /// Per-locale overlays, keyed by locale identifier. The default
    /// locale uses the `root` key.
    pub locales: IndexMap<LocaleId, LocaleOverlay>,
}

impl SiteConfig {
    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    ///
    /// Unknown fields are usually typos. They never fail the parse; the
    /// caller decides whether to warn or abort.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Check the document and merge shared sections with every overlay.
    ///
    /// See [`crate::resolve`] for the merge rules. Fails without partial
    /// output if any precondition or sidebar check fails.
    pub fn resolve(&self) -> Result<ResolvedSite, ConfigError> {
        crate::resolve::resolve(self)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` and `[locales.root]`
/// tables. Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ndescription = \"Test\"\n\n[locales.root]\nlabel = \"English\"\n\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
