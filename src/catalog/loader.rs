//! Parsing of the embedded locale documents.
//!
//! The locale data is compiled into the binary with `include_str!`, so the
//! catalog has no file or network dependency at runtime.

use super::types::{
    CatalogError,
    LanguagePack,
};
use crate::language::Language;

static EN_JSON: &str = include_str!("../../locales/en.json");
static ZH_CN_JSON: &str = include_str!("../../locales/zh-CN.json");
static ZH_TW_JSON: &str = include_str!("../../locales/zh-TW.json");

/// The parsed pack for every supported language, prior to validation.
#[derive(Debug, Clone)]
pub(super) struct LoadedPacks {
    pub(super) en: LanguagePack,
    pub(super) zh_cn: LanguagePack,
    pub(super) zh_tw: LanguagePack,
}

impl LoadedPacks {
    /// Iterate over the packs alongside their language, in `Language::ALL`
    /// order.
    pub(super) fn iter(&self) -> impl Iterator<Item = (Language, &LanguagePack)> {
        [
            (Language::En, &self.en),
            (Language::ZhCn, &self.zh_cn),
            (Language::ZhTw, &self.zh_tw),
        ]
        .into_iter()
    }
}

/// Parse every embedded locale document.
///
/// # Errors
/// `CatalogError::Parse` naming the first language whose document is
/// malformed. Shape violations (a label entry carrying a title, an unknown
/// group name) surface here via `deny_unknown_fields`.
pub(super) fn load_packs() -> Result<LoadedPacks, CatalogError> {
    Ok(LoadedPacks {
        en: parse_pack(Language::En, EN_JSON)?,
        zh_cn: parse_pack(Language::ZhCn, ZH_CN_JSON)?,
        zh_tw: parse_pack(Language::ZhTw, ZH_TW_JSON)?,
    })
}

fn parse_pack(language: Language, raw: &str) -> Result<LanguagePack, CatalogError> {
    tracing::debug!("Parsing embedded locale data for '{language}'");

    serde_json::from_str(raw)
        .map_err(|e| CatalogError::Parse { language, message: e.to_string() })
}
