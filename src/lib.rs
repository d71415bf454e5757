//! Locale-aware configuration resolver for documentation sites.
//!
//! A site config declares shared `[site]` and `[theme]` sections plus one
//! `[locales.<id>]` overlay per language; this crate parses that document
//! from TOML and merges each overlay over the shared sections into one
//! concrete [`ResolvedLocale`] per language. The default locale uses the
//! `root` key and is served at `/`; every other locale defaults to
//! `/<id>/`.
//!
//! Parsing and resolution are separate steps: [`SiteConfig::from_str`]
//! only fails on malformed TOML, while [`SiteConfig::resolve`] checks the
//! document (title present, `root` declared, sidebar shapes) and reports
//! every sidebar violation in one pass.
//!
//! # Module Structure
//!
//! ```text
//! src/
//! ├── config/    # Input model: SiteConfig and its sections
//! ├── resolve    # Merge semantics, ResolvedSite / ResolvedLocale
//! └── types/     # ConfigError, diagnostics, field paths
//! ```
//!
//! # Example
//!
//! ```
//! use doclocale::SiteConfig;
//!
//! let config = SiteConfig::from_str(
//!     r#"
//! [site]
//! title = "EgLib Document"
//! description = "Documentation of EgLib"
//!
//! [locales.root]
//! label = "English"
//!
//! [locales.zh]
//! label = "简体中文"
//! lang = "zh-CN"
//! title = "EgLib 文档"
//! "#,
//! )?;
//!
//! let resolved = config.resolve()?;
//! let zh = resolved.get("zh").unwrap();
//! assert_eq!(zh.title, "EgLib 文档");
//! assert_eq!(zh.link, "/zh/");
//! assert_eq!(zh.description, "Documentation of EgLib");
//! # Ok::<(), doclocale::ConfigError>(())
//! ```

pub mod config;
pub mod resolve;
pub mod types;

pub use config::{
    DocFooterConfig, LocaleId, LocaleOverlay, SidebarEntry, SidebarItem, SiteConfig,
    SiteInfoConfig, ThemeConfig, ThemeOverlay,
};
pub use resolve::{ResolvedLocale, ResolvedSite};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
