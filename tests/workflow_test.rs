//! End-to-end tests over the fixture locale folder

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use googletest::prelude::*;
use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{
    Value,
    json,
};
use t9n::check::{
    CoverageResult,
    check_folder,
};
use t9n::commands::{
    WORKBOOK_FILE_NAME,
    export_workbook,
    import_workbook,
    typedefs_from_file,
};
use t9n::config::T9nSettings;
use t9n::input::folder::{
    FolderError,
    load_locale_folder,
};
use t9n::translator::{
    Language,
    Silent,
    TranslationHit,
    Translator,
    TranslatorConfig,
};
use tempfile::TempDir;

#[fixture]
fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[rstest]
fn test_check_fixtures(fixtures: PathBuf) {
    let results = check_folder(&fixtures, &T9nSettings::default()).unwrap();

    assert_eq!(
        results,
        vec![
            CoverageResult {
                locale: "de".to_string(),
                translation_keys: 3,
                missing_translation_keys: 1,
                coverage: 0.67,
                missing_params: vec![],
            },
            CoverageResult {
                locale: "en".to_string(),
                translation_keys: 3,
                missing_translation_keys: 2,
                coverage: 0.33,
                missing_params: vec![],
            },
        ]
    );
}

#[rstest]
fn test_load_fixtures_reference(fixtures: PathBuf) {
    let folder = load_locale_folder(&fixtures, &T9nSettings::default()).unwrap();

    assert_that!(folder.reference.len(), eq(3));
    assert_that!(
        folder.reference.get("pageTwo.description"),
        some(eq(&"This is a description with {{ params }}!".to_string()))
    );
    assert_that!(folder.language("de").map(|l| l.keys.len()), some(eq(2)));
}

#[rstest]
fn test_check_folder_without_reference() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("de.json"), "{}").unwrap();

    let result = check_folder(temp_dir.path(), &T9nSettings::default());

    assert!(matches!(result, Err(FolderError::FolderMissingReference(_))));
}

#[rstest]
fn test_export_then_import_round_trips_fixtures(fixtures: PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let settings = T9nSettings::default();

    let workbook = export_workbook(
        &fixtures,
        temp_dir.path(),
        &settings,
        NaiveDate::from_ymd_opt(2022, 12, 20).unwrap(),
    )
    .unwrap();
    assert_eq!(workbook, temp_dir.path().join(WORKBOOK_FILE_NAME));

    let out_dir = temp_dir.path().join("imported");
    let written = import_workbook(&workbook, &out_dir, &settings).unwrap();

    assert_eq!(written, vec![out_dir.join("de.json"), out_dir.join("en.json")]);
    assert_eq!(read_json(&out_dir.join("de.json")), read_json(&fixtures.join("de.json")));
    assert_eq!(read_json(&out_dir.join("en.json")), read_json(&fixtures.join("en.json")));
}

#[rstest]
fn test_typedefs_fixtures(fixtures: PathBuf) {
    let types = typedefs_from_file(&fixtures.join("meta.json"), ".").unwrap();

    assert_that!(types, starts_with("/*~ Type definitions for t9n"));
    assert_that!(types, contains_substring("| ['pageOne.headline']"));
    assert_that!(types, contains_substring("| ['pageTwo.description', { params: { params: string } }]"));
    assert_that!(
        types,
        contains_substring("| ['pageTwo.headline', { params: { with: string, two: string } }];")
    );
}

#[rstest]
fn test_translator_over_fixture_dictionaries(fixtures: PathBuf) {
    let meta = read_json(&fixtures.join("meta.json"));
    let translator = Translator::new(
        TranslatorConfig::new(
            vec![
                Language::new("de", "Deutsch", read_json(&fixtures.join("de.json"))),
                Language::new("en", "English", read_json(&fixtures.join("en.json"))),
            ],
            Language::new("meta", "Reference", meta),
        )
        .with_log_fallback(Silent)
        .with_log_missing(Silent),
    );
    translator.try_set_locale("de-AT");
    let params = json!({ "params": "Parametern" }).as_object().cloned().unwrap();

    let description = translator.translate_info("pageTwo.description", Some(&params));
    let headline = translator.translate_info("pageTwo.headline", None);

    assert_eq!(translator.locale(), "de");
    assert_eq!(description.text, "Das ist eine Beschreibung mit Parametern!");
    assert_eq!(description.hit, TranslationHit::CurrentDictionary);
    assert_eq!(headline.text, "Another description {{ with }} {{two}} params!");
    assert_eq!(headline.hit, TranslationHit::FallbackDictionary);
}
