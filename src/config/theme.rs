//! `[theme]` section configuration.
//!
//! The shared `[theme]` table holds the default sidebar tree. Each locale
//! carries its own `[locales.<id>.theme]` overlay; an overlay sidebar fully
//! replaces the shared one (entries are never merged between trees).
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "Introduction"
//! link = "/"
//!
//! [locales.zh.theme]
//! outline_title = "页面内容"
//! doc_footer = { prev = "上一篇", next = "下一篇" }
//!
//! [[locales.zh.theme.sidebar]]
//! text = "介绍"
//! link = "/zh/"
//! ```

use serde::{Deserialize, Serialize};

use super::sidebar::SidebarEntry;

/// Shared theme defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Default navigation tree, rendered top-to-bottom.
    pub sidebar: Vec<SidebarEntry>,
}

/// Per-locale theme overlay.
///
/// `sidebar = None` means "inherit the shared tree"; `Some(vec![])` means
/// "this locale renders no sidebar at all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverlay {
    /// Locale navigation tree; whole-tree replacement when present.
    pub sidebar: Option<Vec<SidebarEntry>>,

    /// Label of the per-page outline. Absent means the renderer's default.
    pub outline_title: Option<String>,

    /// Previous/next footer labels. Absent means the renderer's defaults.
    pub doc_footer: Option<DocFooterConfig>,
}

/// Previous/next page footer labels.
///
/// Either label may be set alone; an absent one is omitted when the footer
/// is serialized, never emitted as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooterConfig {
    /// Label of the "previous page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    /// Label of the "next page" link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
