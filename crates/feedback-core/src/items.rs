//! List Editing Operations
//!
//! Each operation takes a list and returns the edited copy; the caller
//! decides when to commit it.

use crate::domain::{ChecklistItem, ItemDraft};

/// Prefix for ids of user-created items
const CUSTOM_ID_PREFIX: &str = "custom";

/// Fresh id derived from `stamp` (milliseconds), unique within `items`
pub fn next_item_id(items: &[ChecklistItem], stamp: u64) -> String {
    let base = format!("{}-{}", CUSTOM_ID_PREFIX, stamp);
    let taken = |candidate: &str| items.iter().any(|item| item.id == candidate);
    if !taken(&base) {
        return base;
    }
    let mut n = 1u32;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

/// Append a new item built from `draft`
///
/// Blank labels are ignored and the list is returned unchanged.
pub fn add_item(items: &[ChecklistItem], draft: &ItemDraft, stamp: u64) -> Vec<ChecklistItem> {
    let label = draft.label.trim();
    if label.is_empty() {
        log::debug!("ignoring checklist item with blank label");
        return items.to_vec();
    }

    let item = ChecklistItem {
        id: next_item_id(items, stamp),
        label: label.to_string(),
        generated_text: draft.text.as_deref().map(|t| t.trim().to_string()),
        error_text: draft.error_text.as_deref().map(|t| t.trim().to_string()),
    };

    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Drop the item with `id`, if any
pub fn remove_item(items: &[ChecklistItem], id: &str) -> Vec<ChecklistItem> {
    items.iter().filter(|item| item.id != id).cloned().collect()
}

pub fn update_label(items: &[ChecklistItem], id: &str, label: &str) -> Vec<ChecklistItem> {
    update_with(items, id, |item| item.label = label.to_string())
}

pub fn update_text(items: &[ChecklistItem], id: &str, text: &str) -> Vec<ChecklistItem> {
    update_with(items, id, |item| item.generated_text = Some(text.to_string()))
}

pub fn update_error_text(items: &[ChecklistItem], id: &str, error_text: &str) -> Vec<ChecklistItem> {
    update_with(items, id, |item| item.error_text = Some(error_text.to_string()))
}

fn update_with(
    items: &[ChecklistItem],
    id: &str,
    edit: impl Fn(&mut ChecklistItem),
) -> Vec<ChecklistItem> {
    items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.id == id {
                edit(&mut item);
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ChecklistItem> {
        vec![
            ChecklistItem::with_text("one", "One", "first"),
            ChecklistItem::with_text("two", "Two", "second"),
        ]
    }

    #[test]
    fn test_add_item_appends_trimmed() {
        let items = add_item(&sample(), &ItemDraft::new("  Three ").text(" third "), 42);
        assert_eq!(items.len(), 3);
        let added = &items[2];
        assert_eq!(added.id, "custom-42");
        assert_eq!(added.label, "Three");
        assert_eq!(added.generated_text.as_deref(), Some("third"));
        assert_eq!(added.error_text, None);
    }

    #[test]
    fn test_add_item_blank_label_is_noop() {
        let before = sample();
        assert_eq!(add_item(&before, &ItemDraft::new("  "), 1), before);
        assert_eq!(add_item(&before, &ItemDraft::new(""), 1), before);
    }

    #[test]
    fn test_ids_unique_for_same_stamp() {
        let items = add_item(&[], &ItemDraft::new("a"), 7);
        let items = add_item(&items, &ItemDraft::new("b"), 7);
        let items = add_item(&items, &ItemDraft::new("c"), 7);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["custom-7", "custom-7-1", "custom-7-2"]);
    }

    #[test]
    fn test_remove_item() {
        let items = remove_item(&sample(), "one");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "two");
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        assert_eq!(remove_item(&sample(), "missing"), sample());
    }

    #[test]
    fn test_updates() {
        let items = update_label(&sample(), "two", "Zwei");
        let items = update_text(&items, "two", "zweite");
        let items = update_error_text(&items, "one", "oops");
        assert_eq!(items[1].label, "Zwei");
        assert_eq!(items[1].generated_text.as_deref(), Some("zweite"));
        assert_eq!(items[0].error_text.as_deref(), Some("oops"));
        assert_eq!(items[0].label, "One");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        assert_eq!(update_label(&sample(), "nope", "x"), sample());
    }
}
