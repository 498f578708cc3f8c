//! Catalog data shapes and error types.

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::{
    Language,
    UnsupportedLanguage,
};

/// A full page entry: the heading and body text for one block, error, or
/// challenge page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    pub title: String,
    pub message: String,
}

/// A small interface label. Labels carry no title; `deny_unknown_fields`
/// rejects locale data that adds one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelEntry {
    pub message: String,
}

/// The three full-page groups of a language pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageGroup {
    /// Block pages (IP block, WAF, rate limit).
    Block,
    /// Error pages (5xx buckets, DNS failures).
    Error,
    /// Challenge pages (interactive, managed, country, JavaScript).
    Challenge,
}

impl PageGroup {
    /// The group's wire name, as it appears in the locale data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Block => "blockPageTranslations",
            Self::Error => "errorPageTranslations",
            Self::Challenge => "challengePageTranslations",
        }
    }
}

/// The four translation groups for one language.
///
/// Group maps are `BTreeMap` so iteration order is deterministic, which keeps
/// integrity reports and serialized output stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguagePack {
    /// Block-page entries keyed by block reason (e.g. "ip", "waf").
    #[serde(rename = "blockPageTranslations")]
    pub block_page: BTreeMap<String, PageEntry>,

    /// Error-page entries keyed by error-class bucket (e.g. "500s").
    #[serde(rename = "errorPageTranslations")]
    pub error_page: BTreeMap<String, PageEntry>,

    /// Challenge-page entries keyed by challenge type (e.g. "managed").
    #[serde(rename = "challengePageTranslations")]
    pub challenge_page: BTreeMap<String, PageEntry>,

    /// Interface labels keyed by UI slot (e.g. "network-status-cdn").
    #[serde(rename = "interfaceTranslations")]
    pub interface: BTreeMap<String, LabelEntry>,
}

impl LanguagePack {
    /// Read access to one of the full-page groups by name.
    #[must_use]
    pub const fn page_group(&self, group: PageGroup) -> &BTreeMap<String, PageEntry> {
        match group {
            PageGroup::Block => &self.block_page,
            PageGroup::Error => &self.error_page,
            PageGroup::Challenge => &self.challenge_page,
        }
    }
}

/// A single load-time integrity violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Integrity error at '{location}': {message}")]
pub struct IntegrityError {
    /// Path to the offending data (e.g. "zh-CN.blockPageTranslations").
    pub location: String,
    pub message: String,
}

impl IntegrityError {
    #[must_use]
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self { location: location.into(), message: message.into() }
    }
}

/// Errors raised while building or querying the catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    /// The embedded data violates the cross-language invariants.
    #[error("Catalog integrity check failed:\n{}", format_integrity_errors(.0))]
    IntegrityErrors(Vec<IntegrityError>),

    /// An embedded locale document is not valid catalog JSON.
    ///
    /// The serde error is carried as text so the variant stays `Clone` for
    /// the shared-catalog accessor.
    #[error("Failed to parse embedded locale data for '{language}': {message}")]
    Parse {
        language: Language,
        message: String,
    },

    /// A caller-supplied language tag is outside the supported set.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedLanguage),
}

fn format_integrity_errors(errors: &[IntegrityError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.location, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}
