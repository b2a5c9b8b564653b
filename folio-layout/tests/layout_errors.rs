//! Integration tests for layout and config parsing errors.
//!
//! Invalid input must abort with a single diagnostic that points into the
//! offending file.

use std::str::FromStr;

use folio_layout::{CONFIG_TEMPLATE, Error, Layout, LayoutFile, Locale, parse_config};
use tempfile::TempDir;

#[test]
fn test_duplicate_id_labels_both_occurrences() {
    let src = r#"[
        { "id": "hero", "type": "hero-simple" },
        { "id": "hero", "type": "hero-split" }
    ]"#;
    let err = Layout::from_str(src).unwrap_err();

    match err.as_ref() {
        Error::DuplicateId {
            id,
            first_span: Some(first),
            second_span: Some(second),
            ..
        } => {
            assert_eq!(id, "hero");
            assert!(first.offset() < second.offset());
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn test_empty_type_is_rejected() {
    let err = Layout::from_str(r#"[{ "id": "a", "type": "" }]"#).unwrap_err();
    assert_eq!(err.to_string(), "component 'a' has an empty type");
}

#[test]
fn test_object_without_components() {
    let err = Layout::from_str(r#"{ "name": "home" }"#).unwrap_err();
    assert!(matches!(*err, Error::MissingLayout { .. }));
}

#[test]
fn test_malformed_json_reports_parse_error() {
    let err = Layout::from_str("[{ \"id\": \"a\", }]").unwrap_err();
    assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = LayoutFile::open(temp.path().join("missing.json"))
        .err()
        .unwrap();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_config_template_parses_to_defaults() {
    let config = parse_config(CONFIG_TEMPLATE, "folio.toml").unwrap();
    assert_eq!(config.project.source_locale, Locale::from_static("zh"));
    assert_eq!(config.project.target_locale, Locale::from_static("en"));
    assert_eq!(config.paths.pages, "app/[locale]");
    assert_eq!(config.paths.messages, "messages");
}

#[test]
fn test_config_rejects_unknown_fields_and_bad_locales() {
    let err = parse_config("[project]\nlocale = \"zh\"\n", "folio.toml").unwrap_err();
    assert!(matches!(*err, Error::Config { .. }));

    let err = parse_config("[project]\ntarget_locale = \"english!\"\n", "folio.toml").unwrap_err();
    assert!(matches!(*err, Error::Config { .. }));
}
