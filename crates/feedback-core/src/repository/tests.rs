//! Repository Tests
//!
//! ItemStore over the in-memory backend.

#[cfg(test)]
mod tests {
    use crate::defaults::default_items;
    use crate::domain::{ChecklistItem, ChecklistKind};
    use crate::repository::{ItemStore, KeyValueStore, MemoryStore, StoreError};

    fn setup_store() -> ItemStore<MemoryStore> {
        ItemStore::new(MemoryStore::new())
    }

    #[test]
    fn test_load_absent_key() {
        let store = setup_store();
        let loaded = store.load("feedback-good-points").expect("load failed");
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = setup_store();
        let items = vec![
            ChecklistItem::required("a", "tests pass", "fix tests"),
            ChecklistItem::required("b", "lint clean", "run the linter"),
        ];
        store.save("feedback-required-checks", &items).expect("save failed");

        let loaded = store.load("feedback-required-checks").expect("load failed");
        assert_eq!(loaded, Some(items));
    }

    #[test]
    fn test_save_replaces_whole_list() {
        let store = setup_store();
        let key = ChecklistKind::Advice.storage_key();
        store.save(key, &default_items(ChecklistKind::Advice)).unwrap();
        store.save(key, &[ChecklistItem::with_text("only", "Only", "just this")]).unwrap();

        let loaded = store.load(key).unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "only");
    }

    #[test]
    fn test_reads_stored_json_shape() {
        let store = setup_store();
        store
            .backend()
            .set(
                "feedback-good-points",
                r#"[{"id":"custom-1","label":"Tidy","text":"Very tidy."},{"id":"custom-2","label":"Bare"}]"#,
            )
            .unwrap();

        let loaded = store.load("feedback-good-points").unwrap().unwrap();
        assert_eq!(loaded[0].generated_text.as_deref(), Some("Very tidy."));
        assert_eq!(loaded[1].generated_text, None);
    }

    #[test]
    fn test_malformed_value() {
        let store = setup_store();
        store.backend().set("feedback-advice-items", "{not json").unwrap();

        let err = store.load("feedback-advice-items").unwrap_err();
        assert!(matches!(err, StoreError::Malformed { ref key, .. } if key == "feedback-advice-items"));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let store = setup_store();
        assert_eq!(store.load_or_default(ChecklistKind::GoodPoint), default_items(ChecklistKind::GoodPoint));

        store.backend().set(ChecklistKind::Required.storage_key(), "[1, 2").unwrap();
        assert_eq!(store.load_or_default(ChecklistKind::Required), default_items(ChecklistKind::Required));

        store.backend().set_failing(true);
        assert_eq!(store.load_or_default(ChecklistKind::Advice), default_items(ChecklistKind::Advice));
    }

    #[test]
    fn test_load_or_default_prefers_stored() {
        let store = setup_store();
        let items = vec![ChecklistItem::with_text("x", "X", "ex")];
        store.save(ChecklistKind::Advice.storage_key(), &items).unwrap();
        assert_eq!(store.load_or_default(ChecklistKind::Advice), items);
    }

    #[test]
    fn test_stored_empty_list_is_kept() {
        let store = setup_store();
        store.save(ChecklistKind::Required.storage_key(), &[]).unwrap();
        assert!(store.load_or_default(ChecklistKind::Required).is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = setup_store();
        store.backend().set_failing(true);
        let err = store.save("feedback-good-points", &[]).unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
