//! `[site]` shared site metadata.
//!
//! These are the defaults every locale starts from; a locale overlay may
//! override them individually (see [`crate::config::LocaleOverlay`]).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shared site metadata: the base values locales inherit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title. Must be non-empty for resolution to succeed.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Language code (e.g., "en", "zh-Hans"). Used for locales that do not
    /// set their own.
    pub lang: String,

    /// Free-form fields handed to the renderer untouched, in declaration
    /// order.
    pub extra: IndexMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en".into(),
            extra: IndexMap::new(),
        }
    }
}
