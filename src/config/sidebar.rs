//! Sidebar navigation trees.
//!
//! Two representations exist on purpose:
//!
//! - [`SidebarEntry`] is the raw shape as written in the config file. It is
//!   deliberately permissive so a malformed file parses far enough for
//!   every problem to be reported in one pass.
//! - [`SidebarItem`] is the checked tree handed to the renderer: an entry
//!   is either a page link or a group, never both, never neither.
//!
//! # Example
//!
//! ```toml
//! [[theme.sidebar]]
//! text = "Introduction"
//! link = "/"
//!
//! [[theme.sidebar]]
//! text = "Modules"
//! base = "/modules/"
//! items = [
//!     { text = "memory", link = "memory" },
//!     { text = "time", link = "time" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{ConfigDiagnostics, FieldPath};

// ============================================================================
// Raw entries (config file shape)
// ============================================================================

/// Raw sidebar entry as written in the config file.
///
/// Shape constraints (leaf vs group) are checked during resolution, not
/// here, so that a single resolve reports every violating entry at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarEntry {
    /// Entry label, rendered verbatim.
    pub text: String,

    /// Page link. Marks the entry as a leaf.
    pub link: Option<String>,

    /// Link prefix the renderer applies to child links. Groups only.
    pub base: Option<String>,

    /// Child entries. A non-empty list marks the entry as a group.
    pub items: Option<Vec<SidebarEntry>>,
}

impl SidebarEntry {
    /// A leaf entry pointing at a page.
    pub fn page(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            base: None,
            items: None,
        }
    }

    /// A group entry with child entries.
    pub fn group(text: impl Into<String>, items: Vec<SidebarEntry>) -> Self {
        Self {
            text: text.into(),
            link: None,
            base: None,
            items: Some(items),
        }
    }

    /// Set the link prefix applied to child links.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }
}

// ============================================================================
// Checked tree (renderer shape)
// ============================================================================

/// A checked sidebar node: a page link or a titled group.
///
/// Built by resolution from [`SidebarEntry`] values; the leaf/group
/// distinction is encoded in the type, so downstream code never sees an
/// ambiguous entry. Serializes untagged, matching the raw file shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarItem {
    /// Direct page link.
    Link { text: String, link: String },

    /// Titled group of child nodes, rendered in order.
    Group {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        base: Option<String>,
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    /// Get the label of this node.
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Check if this node is a group.
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

// ============================================================================
// Conversion (raw -> checked)
// ============================================================================

/// Convert raw entries into checked nodes, recording shape violations.
///
/// The whole tree is walked even after the first violation. Invalid entries
/// produce no node; callers must treat a non-empty diagnostics set as fatal
/// and discard the partial tree.
pub(crate) fn convert(
    entries: &[SidebarEntry],
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Vec<SidebarItem> {
    let mut items = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if let Some(item) = convert_entry(entry, &path.index(i), diag) {
            items.push(item);
        }
    }
    items
}

fn convert_entry(
    entry: &SidebarEntry,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<SidebarItem> {
    // An empty `items = []` counts as absent.
    let children = entry.items.as_deref().filter(|items| !items.is_empty());

    match (&entry.link, children) {
        (Some(link), None) => {
            if entry.base.is_some() {
                diag.error_with_hint(
                    path.clone(),
                    format!("entry `{}` is a page link but sets `base`", entry.text),
                    "`base` only applies to groups; move it onto an entry with `items` or remove it",
                );
                return None;
            }
            Some(SidebarItem::Link {
                text: entry.text.clone(),
                link: link.clone(),
            })
        }
        (None, Some(children)) => Some(SidebarItem::Group {
            text: entry.text.clone(),
            base: entry.base.clone(),
            items: convert(children, &path.child("items"), diag),
        }),
        (Some(_), Some(_)) => {
            diag.error_with_hint(
                path.clone(),
                format!("entry `{}` defines both `link` and `items`", entry.text),
                "an entry is either a page link or a group; to link a group's landing page, add it as the first item",
            );
            None
        }
        (None, None) => {
            diag.error_with_hint(
                path.clone(),
                format!("entry `{}` defines neither `link` nor `items`", entry.text),
                "add `link` for a page entry, or a non-empty `items` list for a group",
            );
            None
        }
    }
}

// ============================================================================
// tests
// ============================================================================
