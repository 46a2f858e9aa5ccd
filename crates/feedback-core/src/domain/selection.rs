//! Selection State
//!
//! Which required checks passed and which optional items are ticked.

use std::collections::{BTreeMap, BTreeSet};

use super::checklist_item::ChecklistItem;

/// Pass/fail answers for the required checks, keyed by item id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredAnswers {
    answers: BTreeMap<String, bool>,
}

impl RequiredAnswers {
    /// Every item starts out failed
    pub fn for_items(items: &[ChecklistItem]) -> Self {
        Self {
            answers: items.iter().map(|item| (item.id.clone(), false)).collect(),
        }
    }

    /// Unknown ids read as failed
    pub fn is_passed(&self, id: &str) -> bool {
        self.answers.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: impl Into<String>, passed: bool) {
        self.answers.insert(id.into(), passed);
    }

    /// True iff every item passed (vacuously true for no items)
    pub fn all_passed(&self, items: &[ChecklistItem]) -> bool {
        items.iter().all(|item| self.is_passed(&item.id))
    }

    /// Failed items, in list order
    pub fn failed<'a>(&self, items: &'a [ChecklistItem]) -> Vec<&'a ChecklistItem> {
        items.iter().filter(|item| !self.is_passed(&item.id)).collect()
    }
}

/// Set of ticked item ids for one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn remove(&mut self, id: &str) {
        self.ids.remove(id);
    }

    /// Flip membership; returns whether the id is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Selected items, in list order
    pub fn pick<'a>(&self, items: &'a [ChecklistItem]) -> Vec<&'a ChecklistItem> {
        items.iter().filter(|item| self.contains(&item.id)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checks() -> Vec<ChecklistItem> {
        vec![
            ChecklistItem::required("a", "A", "fix a"),
            ChecklistItem::required("b", "B", "fix b"),
        ]
    }

    #[test]
    fn test_answers_start_failed() {
        let items = checks();
        let answers = RequiredAnswers::for_items(&items);
        assert!(!answers.is_passed("a"));
        assert!(!answers.all_passed(&items));
        assert_eq!(answers.failed(&items).len(), 2);
    }

    #[test]
    fn test_all_passed_vacuous() {
        let answers = RequiredAnswers::default();
        assert!(answers.all_passed(&[]));
    }

    #[test]
    fn test_failed_keeps_list_order() {
        let items = vec![
            ChecklistItem::required("z", "Z", "fix z"),
            ChecklistItem::required("a", "A", "fix a"),
            ChecklistItem::required("m", "M", "fix m"),
        ];
        let mut answers = RequiredAnswers::for_items(&items);
        answers.set("a", true);
        let failed: Vec<&str> = answers.failed(&items).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(failed, vec!["z", "m"]);
    }

    #[test]
    fn test_unknown_id_is_failed() {
        let items = checks();
        let mut answers = RequiredAnswers::default();
        answers.set("a", true);
        assert!(!answers.all_passed(&items));
    }

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("x"));
        assert!(selection.contains("x"));
        assert!(!selection.toggle("x"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_insert_remove_membership() {
        let mut selection = Selection::new();
        selection.insert("a");
        selection.insert("b");
        selection.insert("a");
        assert_eq!(selection.len(), 2);

        selection.remove("a");
        assert!(!selection.contains("a"));
        assert!(selection.contains("b"));
        assert_eq!(selection.len(), 1);

        selection.remove("missing");
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_pick_follows_list_order() {
        let items = vec![
            ChecklistItem::with_text("b", "B", "bee"),
            ChecklistItem::with_text("a", "A", "ay"),
        ];
        let selection: Selection = ["a", "b"].into_iter().collect();
        let picked: Vec<&str> = selection.pick(&items).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(picked, vec!["b", "a"]);
    }
}
