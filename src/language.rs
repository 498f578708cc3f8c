//! Supported language identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Error for a language tag outside the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported language tag '{tag}' (supported: en, zh-CN, zh-TW)")]
pub struct UnsupportedLanguage {
    /// The tag as received from the caller.
    pub tag: String,
}

impl UnsupportedLanguage {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

/// Languages the catalog ships translations for.
///
/// The set is closed: adding a language means adding a locale data file and a
/// variant here, so every lookup stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[serde(rename = "en")]
    En,
    /// Simplified Chinese.
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// Traditional Chinese.
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    /// Every supported language, in a fixed order.
    pub const ALL: [Self; 3] = [Self::En, Self::ZhCn, Self::ZhTw];

    /// The wire tag for this language (RFC 5646 style).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl Default for Language {
    /// Simplified Chinese is the product default.
    fn default() -> Self {
        Self::ZhCn
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// Parses a wire tag. Unknown tags fail rather than falling back, so
    /// callers cannot silently serve the wrong language.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "zh-CN" => Ok(Self::ZhCn),
            "zh-TW" => Ok(Self::ZhTw),
            _ => Err(UnsupportedLanguage::new(s)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::english("en", Language::En)]
    #[case::simplified("zh-CN", Language::ZhCn)]
    #[case::traditional("zh-TW", Language::ZhTw)]
    fn parse_supported_tags(#[case] tag: &str, #[case] expected: Language) {
        assert_that!(tag.parse::<Language>(), ok(eq(&expected)));
    }

    #[rstest]
    #[case::empty("")]
    #[case::wrong_case("EN")]
    #[case::underscore("zh_CN")]
    #[case::unshipped("ja")]
    #[case::bare_zh("zh")]
    fn parse_unsupported_tags(#[case] tag: &str) {
        let result = tag.parse::<Language>();

        assert_that!(
            result,
            err(field!(UnsupportedLanguage.tag, eq(tag)))
        );
    }

    #[rstest]
    fn display_round_trips_every_language() {
        for language in Language::ALL {
            let tag = language.to_string();
            assert_that!(tag.parse::<Language>(), ok(eq(&language)));
        }
    }

    #[rstest]
    fn default_is_simplified_chinese() {
        assert_that!(Language::default(), eq(Language::ZhCn));
    }

    #[rstest]
    fn serde_uses_wire_tags() {
        let json = serde_json::to_string(&Language::ZhTw).unwrap();
        assert_that!(json, eq("\"zh-TW\""));

        let parsed: Language = serde_json::from_str("\"zh-CN\"").unwrap();
        assert_that!(parsed, eq(Language::ZhCn));
    }
}
