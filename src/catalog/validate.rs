//! Load-time integrity checks.
//!
//! Every violation is collected before failing so a broken locale file is
//! reported in one pass, not one key at a time.

use std::collections::BTreeMap;

use super::loader::LoadedPacks;
use super::types::{
    IntegrityError,
    LabelEntry,
    LanguagePack,
    PageEntry,
    PageGroup,
};
use crate::language::Language;

/// Wire name of the interface-label group in integrity reports.
const INTERFACE_GROUP: &str = "interfaceTranslations";

/// Verify the cross-language invariants of the parsed packs.
///
/// The English pack is the reference: every other language must expose
/// exactly its key set in every group. All entries must carry non-empty
/// text.
///
/// # Errors
/// Every violation found, as a list of `IntegrityError`s.
pub(super) fn verify(packs: &LoadedPacks) -> Result<(), Vec<IntegrityError>> {
    let mut errors = Vec::new();
    let reference = &packs.en;

    for (language, pack) in packs.iter() {
        check_parity(language, pack, reference, &mut errors);
        check_entries(language, pack, &mut errors);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Compare the key set of every group against the reference pack.
fn check_parity(
    language: Language,
    pack: &LanguagePack,
    reference: &LanguagePack,
    errors: &mut Vec<IntegrityError>,
) {
    for group in [PageGroup::Block, PageGroup::Error, PageGroup::Challenge] {
        compare_keys(
            language,
            group.as_str(),
            pack.page_group(group),
            reference.page_group(group),
            errors,
        );
    }
    compare_keys(language, INTERFACE_GROUP, &pack.interface, &reference.interface, errors);
}

/// Report keys missing from or unexpected in `keys` relative to `reference`.
fn compare_keys<V>(
    language: Language,
    group: &str,
    keys: &BTreeMap<String, V>,
    reference: &BTreeMap<String, V>,
    errors: &mut Vec<IntegrityError>,
) {
    let location = format!("{language}.{group}");

    for key in reference.keys() {
        if !keys.contains_key(key) {
            errors.push(IntegrityError::new(&location, format!("missing key '{key}'")));
        }
    }
    for key in keys.keys() {
        if !reference.contains_key(key) {
            errors.push(IntegrityError::new(&location, format!("unexpected key '{key}'")));
        }
    }
}

/// Check that every entry carries non-empty text.
fn check_entries(language: Language, pack: &LanguagePack, errors: &mut Vec<IntegrityError>) {
    for group in [PageGroup::Block, PageGroup::Error, PageGroup::Challenge] {
        for (key, entry) in pack.page_group(group) {
            check_page_entry(language, group.as_str(), key, entry, errors);
        }
    }
    for (key, entry) in &pack.interface {
        check_label_entry(language, key, entry, errors);
    }
}

fn check_page_entry(
    language: Language,
    group: &str,
    key: &str,
    entry: &PageEntry,
    errors: &mut Vec<IntegrityError>,
) {
    if entry.title.is_empty() {
        errors.push(IntegrityError::new(
            format!("{language}.{group}.{key}.title"),
            "must not be empty",
        ));
    }
    if entry.message.is_empty() {
        errors.push(IntegrityError::new(
            format!("{language}.{group}.{key}.message"),
            "must not be empty",
        ));
    }
}

fn check_label_entry(
    language: Language,
    key: &str,
    entry: &LabelEntry,
    errors: &mut Vec<IntegrityError>,
) {
    if entry.message.is_empty() {
        errors.push(IntegrityError::new(
            format!("{language}.{INTERFACE_GROUP}.{key}.message"),
            "must not be empty",
        ));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::super::loader;
    use super::*;

    fn packs() -> LoadedPacks {
        loader::load_packs().unwrap()
    }

    #[rstest]
    fn embedded_data_passes_verification() {
        assert_that!(verify(&packs()), ok(anything()));
    }

    #[rstest]
    fn missing_key_is_reported_with_location() {
        let mut packs = packs();
        packs.zh_cn.block_page.remove("ip");

        let errors = verify(&packs).unwrap_err();

        assert_that!(
            errors,
            elements_are![all![
                field!(IntegrityError.location, eq("zh-CN.blockPageTranslations")),
                field!(IntegrityError.message, eq("missing key 'ip'"))
            ]]
        );
    }

    #[rstest]
    fn unexpected_key_is_reported() {
        let mut packs = packs();
        packs.zh_tw.interface.insert(
            "network-status-edge".to_string(),
            LabelEntry { message: "Edge".to_string() },
        );

        let errors = verify(&packs).unwrap_err();

        assert_that!(
            errors,
            elements_are![all![
                field!(IntegrityError.location, eq("zh-TW.interfaceTranslations")),
                field!(IntegrityError.message, eq("unexpected key 'network-status-edge'"))
            ]]
        );
    }

    #[rstest]
    fn reference_language_drift_flags_every_other_language() {
        let mut packs = packs();
        packs.en.error_page.insert(
            "2000s".to_string(),
            PageEntry { title: "Origin Error".to_string(), message: "The origin is unreachable.".to_string() },
        );

        let errors = verify(&packs).unwrap_err();

        // zh-CN and zh-TW both miss the new English key.
        assert_that!(errors, len(eq(2)));
        assert_that!(
            errors,
            each(field!(IntegrityError.message, eq("missing key '2000s'")))
        );
    }

    #[rstest]
    fn empty_title_is_reported() {
        let mut packs = packs();
        if let Some(entry) = packs.en.challenge_page.get_mut("managed") {
            entry.title.clear();
        }

        let errors = verify(&packs).unwrap_err();

        assert_that!(
            errors,
            elements_are![all![
                field!(
                    IntegrityError.location,
                    eq("en.challengePageTranslations.managed.title")
                ),
                field!(IntegrityError.message, eq("must not be empty"))
            ]]
        );
    }

    #[rstest]
    fn empty_label_message_is_reported() {
        let mut packs = packs();
        if let Some(entry) = packs.zh_cn.interface.get_mut("error-details") {
            entry.message.clear();
        }

        let errors = verify(&packs).unwrap_err();

        assert_that!(
            errors,
            elements_are![field!(
                IntegrityError.location,
                eq("zh-CN.interfaceTranslations.error-details.message")
            )]
        );
    }

    #[rstest]
    fn multiple_violations_are_all_collected() {
        let mut packs = packs();
        packs.zh_cn.block_page.remove("waf");
        if let Some(entry) = packs.zh_tw.error_page.get_mut("500s") {
            entry.message.clear();
        }

        let errors = verify(&packs).unwrap_err();

        assert_that!(errors, len(eq(2)));
    }
}
