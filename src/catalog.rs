//! The translation catalog: language → four groups of page strings.
//!
//! The catalog is built once from locale data embedded at compile time,
//! validated, and never mutated afterwards. It is therefore `Send + Sync`
//! and safe for unrestricted concurrent reads.

mod loader;
mod types;
mod validate;

use std::sync::LazyLock;

pub use types::{
    CatalogError,
    IntegrityError,
    LabelEntry,
    LanguagePack,
    PageEntry,
    PageGroup,
};

use crate::language::{
    Language,
    UnsupportedLanguage,
};

/// Immutable translation catalog for every supported language.
///
/// The default language is injected at construction rather than held as
/// process-wide mutable state; rendering code that wants a different default
/// builds its own catalog with [`Catalog::load_with`].
#[derive(Debug, Clone)]
pub struct Catalog {
    en: LanguagePack,
    zh_cn: LanguagePack,
    zh_tw: LanguagePack,
    default_language: Language,
}

impl Catalog {
    /// Build the catalog with the product default language
    /// ([`Language::default`]).
    ///
    /// # Errors
    /// - `CatalogError::Parse` if an embedded locale document is malformed
    /// - `CatalogError::IntegrityErrors` if key-set parity or entry content
    ///   checks fail
    pub fn load() -> Result<Self, CatalogError> {
        Self::load_with(Language::default())
    }

    /// Build the catalog with an explicit default language.
    ///
    /// # Errors
    /// Same as [`Catalog::load`].
    pub fn load_with(default_language: Language) -> Result<Self, CatalogError> {
        tracing::debug!("Loading translation catalog (default language: {default_language})");

        let packs = loader::load_packs()?;
        if let Err(errors) = validate::verify(&packs) {
            tracing::warn!("Catalog integrity check failed with {} error(s)", errors.len());
            return Err(CatalogError::IntegrityErrors(errors));
        }

        let loader::LoadedPacks { en, zh_cn, zh_tw } = packs;
        tracing::debug!("Translation catalog loaded ({} languages)", Language::ALL.len());
        Ok(Self { en, zh_cn, zh_tw, default_language })
    }

    /// The language used when [`Catalog::resolve`] is called with `None`.
    #[must_use]
    pub const fn default_language(&self) -> Language {
        self.default_language
    }

    /// The four translation groups for a language.
    ///
    /// Total: `Language` is a closed set, so every variant has a pack.
    #[must_use]
    pub const fn pack(&self, language: Language) -> &LanguagePack {
        match language {
            Language::En => &self.en,
            Language::ZhCn => &self.zh_cn,
            Language::ZhTw => &self.zh_tw,
        }
    }

    /// Resolve a language to its translation groups, defaulting to the
    /// catalog's default language when none is given.
    ///
    /// The returned pack is a shared read-only view; two calls with the same
    /// language return the same data.
    #[must_use]
    pub const fn resolve(&self, language: Option<Language>) -> &LanguagePack {
        match language {
            Some(language) => self.pack(language),
            None => self.pack(self.default_language),
        }
    }

    /// Resolve a raw language tag (e.g. from a query parameter).
    ///
    /// # Errors
    /// `UnsupportedLanguage` for tags outside the supported set. Callers
    /// that want fallback-to-default semantics must opt in explicitly.
    pub fn resolve_tag(&self, tag: &str) -> Result<&LanguagePack, UnsupportedLanguage> {
        let language = tag.parse::<Language>()?;
        Ok(self.pack(language))
    }

    /// The pack for the default language.
    #[must_use]
    pub const fn default_pack(&self) -> &LanguagePack {
        self.pack(self.default_language)
    }

    /// Iterate over every (language, pack) pair in `Language::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &LanguagePack)> {
        [
            (Language::En, &self.en),
            (Language::ZhCn, &self.zh_cn),
            (Language::ZhTw, &self.zh_tw),
        ]
        .into_iter()
    }
}

static SHARED: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(Catalog::load);

/// The process-wide catalog, built once on first access with the product
/// default language.
///
/// # Errors
/// The (cached) load failure, cloned on every call. A failure here means the
/// embedded locale data is broken and the crate itself needs fixing.
pub fn shared() -> Result<&'static Catalog, CatalogError> {
    SHARED.as_ref().map_err(Clone::clone)
}
