//! edge-page-i18n
//!
//! Static translation catalog for the pages an edge security product serves
//! in place of origin content: block pages, error pages, challenge pages,
//! and the small interface labels around them.
//!
//! The catalog holds literal strings for a closed set of languages and
//! resolves a language to its four translation groups. It does no
//! formatting, negotiation, or persistence; HTML rendering lives elsewhere.
//!
//! ```
//! use edge_page_i18n::catalog;
//! use edge_page_i18n::language::Language;
//!
//! # fn main() -> Result<(), edge_page_i18n::catalog::CatalogError> {
//! let catalog = catalog::shared()?;
//! let pack = catalog.resolve(Some(Language::En));
//! assert_eq!(
//!     pack.block_page.get("ip").map(|entry| entry.title.as_str()),
//!     Some("Access Denied"),
//! );
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod language;

pub use catalog::{
    Catalog,
    CatalogError,
    LabelEntry,
    LanguagePack,
    PageEntry,
    PageGroup,
};
pub use config::RenderSettings;
pub use language::{
    Language,
    UnsupportedLanguage,
};
