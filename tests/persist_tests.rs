//! File persistence and unsaved-change detection

use apicore_config::models::{ConfigDocument, ParameterValue};
use apicore_config::persist::{PersistError, has_unsaved_changes, load_document, save_document};
use tempfile::tempdir;

fn valid_document() -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    doc.friendly_name = "Wallpaper Search".to_string();
    doc.link = "https://example.com/api/search".to_string();
    doc.response.image.path = "$.data.url".to_string();

    let count = doc.add_parameter();
    count.name = "count".to_string();
    count.friendly_name = "Count".to_string();
    count.set_value(ParameterValue::Integer {
        min_value: 1,
        max_value: 50,
        value: 10,
    });
    let keyword = doc.add_parameter();
    keyword.name = "keyword".to_string();
    keyword.friendly_name = "Keyword".to_string();

    doc
}

mod save_load_tests {
    use super::*;

    #[test]
    fn a_saved_document_loads_back_identically() {
        let dir = tempdir().unwrap();
        let doc = valid_document();

        let path = save_document(&dir.path().join("search.api.json"), &doc).unwrap();
        let loaded = load_document(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn saving_appends_the_preferred_extension() {
        let dir = tempdir().unwrap();
        let path = save_document(&dir.path().join("search"), &valid_document()).unwrap();
        assert!(path.to_string_lossy().ends_with("search.api.json"));
        assert!(path.is_file());
    }

    #[test]
    fn an_invalid_document_is_never_written() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("broken.api.json");

        let mut doc = valid_document();
        doc.link.clear();

        let err = save_document(&target, &doc).unwrap_err();
        assert!(matches!(err, PersistError::Invalid(_)));
        assert!(!target.exists());
    }

    #[test]
    fn loading_a_missing_file_reports_io() {
        let dir = tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.api.json")).unwrap_err();
        assert!(matches!(err, PersistError::Io(_)));
    }

    #[test]
    fn loading_garbage_reports_a_malformed_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.api.json");
        std::fs::write(&path, "not json").unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, PersistError::Malformed(_)));
    }

    #[test]
    fn a_document_with_schema_violations_still_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("incomplete.api.json");
        std::fs::write(&path, r#"{"friendly_name": "No link yet"}"#).unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.friendly_name, "No link yet");
        assert!(apicore_config::validate(&doc).is_err());
    }
}

mod change_tracking_tests {
    use super::*;

    #[test]
    fn a_freshly_saved_document_has_no_unsaved_changes() {
        let dir = tempdir().unwrap();
        let doc = valid_document();
        let path = save_document(&dir.path().join("search.api.json"), &doc).unwrap();

        assert!(!has_unsaved_changes(&doc, Some(&path)));
    }

    #[test]
    fn editing_any_field_marks_the_document_dirty() {
        let dir = tempdir().unwrap();
        let mut doc = valid_document();
        let path = save_document(&dir.path().join("search.api.json"), &doc).unwrap();

        doc.intro = "now with a description".to_string();
        assert!(has_unsaved_changes(&doc, Some(&path)));
    }

    #[test]
    fn reordering_parameters_counts_as_a_change() {
        let dir = tempdir().unwrap();
        let mut doc = valid_document();
        let path = save_document(&dir.path().join("search.api.json"), &doc).unwrap();

        doc.parameters.swap(0, 1);
        assert!(has_unsaved_changes(&doc, Some(&path)));
    }

    #[test]
    fn an_unreadable_snapshot_counts_as_changed() {
        let dir = tempdir().unwrap();
        let doc = valid_document();
        assert!(has_unsaved_changes(
            &doc,
            Some(&dir.path().join("vanished.api.json"))
        ));
    }

    #[test]
    fn a_corrupt_snapshot_counts_as_changed() {
        let dir = tempdir().unwrap();
        let doc = valid_document();
        let path = save_document(&dir.path().join("search.api.json"), &doc).unwrap();
        std::fs::write(&path, "{truncated").unwrap();

        assert!(has_unsaved_changes(&doc, Some(&path)));
    }

    #[test]
    fn never_saved_documents_follow_the_blank_rule() {
        assert!(!has_unsaved_changes(&ConfigDocument::new(), None));
        assert!(has_unsaved_changes(&valid_document(), None));
    }
}
