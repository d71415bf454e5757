//! Merging shared sections with per-locale overlays.
//!
//! Resolution checks the parsed document, then produces one
//! [`ResolvedLocale`] per declared locale, in declaration order. A resolve
//! either succeeds for every locale or fails without partial output; all
//! sidebar violations are reported in a single failing call.
//!
//! # Merge Semantics
//!
//! | Field          | Rule                                                |
//! |----------------|-----------------------------------------------------|
//! | `title`        | overlay wins if present and non-empty               |
//! | `description`  | overlay wins if present                             |
//! | `lang`         | overlay wins if present                             |
//! | `link`         | overlay wins if present, else `/` or `/<id>/`       |
//! | `sidebar`      | whole-list replacement if present, even when empty  |
//! | `extra`        | whole-table replacement if present                  |
//! | `label`, `outline_title`, `doc_footer` | locale-only, copied through |
//!
//! Lists and tables are never merged element-by-element; an overlay that
//! sets one replaces the shared value outright.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{
    DocFooterConfig, LocaleId, LocaleOverlay, SidebarItem, SiteConfig, sidebar,
};
use crate::types::{ConfigDiagnostics, ConfigError, FieldPath};

// ============================================================================
// resolved output
// ============================================================================

/// Fully merged configuration for one locale.
///
/// Every inheritable field is concrete here; renderers never consult the
/// shared sections again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocale {
    /// Display name in the locale switcher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// BCP 47 tag for the `<html lang>` attribute.
    pub lang: String,

    /// Link prefix for this locale's pages.
    pub link: String,

    /// Site title shown for this locale.
    pub title: String,

    /// Site description shown for this locale.
    pub description: String,

    /// Checked sidebar tree, in document order.
    pub sidebar: Vec<SidebarItem>,

    /// Heading of the outline panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_title: Option<String>,

    /// Prev/next footer labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_footer: Option<DocFooterConfig>,

    /// Free-form values passed through to templates.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, toml::Value>,
}

/// All resolved locales of a site, in declaration order.
///
/// Only [`SiteConfig::resolve`] builds this, so every value went through
/// the full set of checks; in particular the `root` locale is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedSite {
    locales: IndexMap<LocaleId, ResolvedLocale>,
}

impl ResolvedSite {
    /// Look up a locale by identifier.
    pub fn get(&self, id: &str) -> Option<&ResolvedLocale> {
        self.locales.get(id)
    }

    /// The default locale.
    ///
    /// Always present on values built by [`SiteConfig::resolve`].
    pub fn root(&self) -> Option<&ResolvedLocale> {
        self.get(LocaleId::ROOT)
    }

    /// Iterate locales in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleId, &ResolvedLocale)> {
        self.locales.iter()
    }

    /// Number of resolved locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Serialize to pretty-printed JSON, locales in declaration order.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

// ============================================================================
// resolution
// ============================================================================

/// Check the document and build the per-locale view.
pub(crate) fn resolve(config: &SiteConfig) -> Result<ResolvedSite, ConfigError> {
    if config.site.title.trim().is_empty() {
        return Err(ConfigError::MissingTitle);
    }
    if config.locales.is_empty() {
        return Err(ConfigError::NoLocalesDeclared);
    }
    if !config.locales.contains_key(LocaleId::ROOT) {
        return Err(ConfigError::MissingRootLocale);
    }

    // Walk every sidebar before building anything, so one failing resolve
    // reports every violation in the document.
    let mut diag = ConfigDiagnostics::new();
    let shared = sidebar::convert(
        &config.theme.sidebar,
        &FieldPath::new("theme.sidebar"),
        &mut diag,
    );

    let converted: Vec<Option<Vec<SidebarItem>>> = config
        .locales
        .iter()
        .map(|(id, overlay)| {
            overlay.theme.sidebar.as_deref().map(|entries| {
                let path = FieldPath::new("locales")
                    .child(id.as_str())
                    .child("theme")
                    .child("sidebar");
                sidebar::convert(entries, &path, &mut diag)
            })
        })
        .collect();

    diag.into_result().map_err(ConfigError::Sidebar)?;

    let locales = config
        .locales
        .iter()
        .zip(converted)
        .map(|((id, overlay), sidebar)| {
            let sidebar = sidebar.unwrap_or_else(|| shared.clone());
            (id.clone(), resolve_locale(config, id, overlay, sidebar))
        })
        .collect();

    Ok(ResolvedSite { locales })
}

fn resolve_locale(
    config: &SiteConfig,
    id: &LocaleId,
    overlay: &LocaleOverlay,
    sidebar: Vec<SidebarItem>,
) -> ResolvedLocale {
    // An empty title override falls back to the shared title.
    let title = match &overlay.title {
        Some(title) if !title.is_empty() => title.clone(),
        _ => config.site.title.clone(),
    };

    ResolvedLocale {
        label: overlay.label.clone(),
        lang: overlay
            .lang
            .clone()
            .unwrap_or_else(|| config.site.lang.clone()),
        link: overlay.link.clone().unwrap_or_else(|| id.default_link()),
        title,
        description: overlay
            .description
            .clone()
            .unwrap_or_else(|| config.site.description.clone()),
        sidebar,
        outline_title: overlay.theme.outline_title.clone(),
        doc_footer: overlay.theme.doc_footer.clone(),
        extra: overlay
            .extra
            .clone()
            .unwrap_or_else(|| config.site.extra.clone()),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    /// Bilingual config mirroring a real two-locale docs site.
    fn eglib_config() -> SiteConfig {
        SiteConfig::from_str(
            r#"[site]
title = "EgLib Document"
description = "Documentation of EgLib"

[[theme.sidebar]]
text = "Introduction"
link = "/"

[[theme.sidebar]]
text = "Modules"
base = "/modules/"
items = [
    { text = "memory", link = "memory" },
    { text = "time", link = "time" },
    { text = "fs", link = "fs" },
]

[locales.root]
label = "English"

[locales.zh]
label = "简体中文"
lang = "zh-CN"
title = "EgLib 文档"
description = "EgLib 的文档"

[locales.zh.theme]
outline_title = "页面内容"
doc_footer = { prev = "上一篇", next = "下一篇" }

[[locales.zh.theme.sidebar]]
text = "介绍"
link = "/zh/"

[[locales.zh.theme.sidebar]]
text = "模块"
base = "/zh/modules/"
items = [
    { text = "memory", link = "memory" },
    { text = "time", link = "time" },
    { text = "fs", link = "fs" },
]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_two_locale_site() {
        let resolved = eglib_config().resolve().unwrap();
        assert_eq!(resolved.len(), 2);

        let root = resolved.root().unwrap();
        assert_eq!(root.title, "EgLib Document");
        assert_eq!(root.lang, "en");
        assert_eq!(root.link, "/");
        assert_eq!(root.label.as_deref(), Some("English"));
        assert_eq!(root.sidebar[0].text(), "Introduction");
        assert!(root.outline_title.is_none());

        let zh = resolved.get("zh").unwrap();
        assert_eq!(zh.title, "EgLib 文档");
        assert_eq!(zh.lang, "zh-CN");
        assert_eq!(zh.link, "/zh/");
        assert_eq!(zh.sidebar[0].text(), "介绍");
        assert_eq!(zh.outline_title.as_deref(), Some("页面内容"));
        let footer = zh.doc_footer.as_ref().unwrap();
        assert_eq!(footer.prev.as_deref(), Some("上一篇"));
        assert_eq!(footer.next.as_deref(), Some("下一篇"));
    }

    #[test]
    fn test_locale_inherits_shared_values() {
        let config = test_parse_config("[locales.zh]\nlabel = \"简体中文\"");
        let resolved = config.resolve().unwrap();

        let zh = resolved.get("zh").unwrap();
        assert_eq!(zh.title, "Test");
        assert_eq!(zh.description, "Test");
        assert_eq!(zh.lang, "en");
        assert_eq!(zh.link, "/zh/");
    }

    #[test]
    fn test_empty_title_override_falls_back() {
        let config = test_parse_config("[locales.zh]\ntitle = \"\"");
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.get("zh").unwrap().title, "Test");
    }

    #[test]
    fn test_empty_description_override_is_kept() {
        // Unlike `title`, an empty description is a real override.
        let config = test_parse_config("[locales.zh]\ndescription = \"\"");
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.get("zh").unwrap().description, "");
    }

    #[test]
    fn test_explicit_link_override() {
        let config = test_parse_config("[locales.zh]\nlink = \"/cn/\"");
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.get("zh").unwrap().link, "/cn/");
    }

    #[test]
    fn test_sidebar_replaces_instead_of_merging() {
        let config = test_parse_config(
            r#"[[theme.sidebar]]
text = "A"
link = "/a"

[[theme.sidebar]]
text = "B"
link = "/b"

[locales.zh]

[[locales.zh.theme.sidebar]]
text = "C"
link = "/zh/c"
"#,
        );
        let resolved = config.resolve().unwrap();

        fn sidebar_texts(locale: &ResolvedLocale) -> Vec<&str> {
            locale.sidebar.iter().map(SidebarItem::text).collect()
        }
        assert_eq!(sidebar_texts(resolved.root().unwrap()), ["A", "B"]);
        assert_eq!(sidebar_texts(resolved.get("zh").unwrap()), ["C"]);
    }

    #[test]
    fn test_empty_sidebar_override_clears() {
        let config = test_parse_config(
            "[[theme.sidebar]]\ntext = \"A\"\nlink = \"/a\"\n\n[locales.zh]\n[locales.zh.theme]\nsidebar = []",
        );
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.root().unwrap().sidebar.len(), 1);
        assert!(resolved.get("zh").unwrap().sidebar.is_empty());
    }

    #[test]
    fn test_sibling_order_preserved() {
        let resolved = eglib_config().resolve().unwrap();
        let SidebarItem::Group { items, .. } = &resolved.root().unwrap().sidebar[1] else {
            panic!("expected a group");
        };
        let texts: Vec<_> = items.iter().map(SidebarItem::text).collect();
        assert_eq!(texts, ["memory", "time", "fs"]);
    }

    #[test]
    fn test_locale_order_follows_declaration() {
        let config = test_parse_config("[locales.zh]\n[locales.ja]\n[locales.de]");
        let resolved = config.resolve().unwrap();
        let keys: Vec<_> = resolved.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(keys, ["root", "zh", "ja", "de"]);
    }

    #[test]
    fn test_extra_replaced_whole() {
        let config = test_parse_config(
            r#"[site.extra]
repo = "eglib/eglib"
edit_links = true

[locales.zh.extra]
repo = "eglib/eglib-zh"
"#,
        );
        let resolved = config.resolve().unwrap();

        let root = resolved.root().unwrap();
        assert_eq!(root.extra.len(), 2);
        let zh = resolved.get("zh").unwrap();
        assert_eq!(zh.extra.len(), 1);
        assert_eq!(
            zh.extra["repo"],
            toml::Value::String("eglib/eglib-zh".to_owned())
        );
    }

    #[test]
    fn test_missing_title() {
        let config = SiteConfig::from_str("[site]\ntitle = \"  \"\n\n[locales.root]").unwrap();
        assert!(matches!(config.resolve(), Err(ConfigError::MissingTitle)));
    }

    #[test]
    fn test_no_locales_declared() {
        let config = SiteConfig::from_str("[site]\ntitle = \"Test\"").unwrap();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::NoLocalesDeclared)
        ));
    }

    #[test]
    fn test_missing_root_locale() {
        let config = SiteConfig::from_str("[site]\ntitle = \"Test\"\n\n[locales.zh]").unwrap();
        assert!(matches!(
            config.resolve(),
            Err(ConfigError::MissingRootLocale)
        ));
    }

    #[test]
    fn test_invalid_sidebar_fails_whole_resolve() {
        // The root locale is fine, but the zh sidebar is not; nothing resolves.
        let config = test_parse_config(
            "[locales.zh]\n\n[[locales.zh.theme.sidebar]]\ntext = \"Dangling\"",
        );
        let err = config.resolve().unwrap_err();
        let ConfigError::Sidebar(diag) = err else {
            panic!("expected sidebar diagnostics, got {err}");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "locales.zh.theme.sidebar[0]"
        );
    }

    #[test]
    fn test_all_sidebar_violations_reported() {
        let config = test_parse_config(
            r#"[[theme.sidebar]]
text = "Shared"

[locales.zh]

[[locales.zh.theme.sidebar]]
text = "Local"
"#,
        );
        let ConfigError::Sidebar(diag) = config.resolve().unwrap_err() else {
            panic!("expected sidebar diagnostics");
        };
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.sidebar[0]");
        assert_eq!(
            diag.errors()[1].field.as_str(),
            "locales.zh.theme.sidebar[0]"
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let config = eglib_config();
        assert_eq!(config.resolve().unwrap(), config.resolve().unwrap());
    }

    #[test]
    fn test_resolve_leaves_input_untouched() {
        let config = eglib_config();
        let before = config.clone();
        let _ = config.resolve().unwrap();
        assert_eq!(config, before);
    }

    #[test]
    fn test_get_unknown_locale() {
        let resolved = eglib_config().resolve().unwrap();
        assert!(resolved.get("fr").is_none());
    }

    #[test]
    fn test_json_output() {
        let json = eglib_config().resolve().unwrap().to_json_string().unwrap();

        // declaration order survives serialization
        let root_pos = json.find("\"root\"").unwrap();
        let zh_pos = json.find("\"zh\"").unwrap();
        assert!(root_pos < zh_pos);

        assert!(json.contains("\"title\": \"EgLib 文档\""));
        // absent optionals are dropped, not serialized as null
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_json_output_partial_doc_footer() {
        // A footer may set a single label; the absent one is dropped too.
        let config = test_parse_config("[locales.zh.theme]\ndoc_footer = { prev = \"上一篇\" }");
        let json = config.resolve().unwrap().to_json_string().unwrap();

        assert!(json.contains("\"prev\": \"上一篇\""));
        assert!(!json.contains("\"next\""));
        assert!(!json.contains("null"));
    }
}
