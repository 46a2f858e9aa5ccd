//! Feedback Session
//!
//! Owns the three checklist lists and everything the reviewer has ticked.
//! The UI holds exactly one of these.

use crate::compose::FeedbackInput;
use crate::defaults::default_items;
use crate::domain::{ChecklistItem, ChecklistKind, RequiredAnswers, Selection};
use crate::repository::{ItemStore, KeyValueStore, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSession {
    pub required_checks: Vec<ChecklistItem>,
    pub good_points: Vec<ChecklistItem>,
    pub advice_items: Vec<ChecklistItem>,
    pub required_answers: RequiredAnswers,
    pub good_selection: Selection,
    pub advice_selection: Selection,
    pub other_comment: String,
}

impl Default for FeedbackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackSession {
    /// Session over the built-in lists, nothing selected
    pub fn new() -> Self {
        let required_checks = default_items(ChecklistKind::Required);
        Self {
            required_answers: RequiredAnswers::for_items(&required_checks),
            required_checks,
            good_points: default_items(ChecklistKind::GoodPoint),
            advice_items: default_items(ChecklistKind::Advice),
            good_selection: Selection::new(),
            advice_selection: Selection::new(),
            other_comment: String::new(),
        }
    }

    /// Session over the stored lists, falling back to defaults per list
    pub fn restore<S: KeyValueStore>(store: &ItemStore<S>) -> Self {
        let mut session = Self::new();
        for kind in ChecklistKind::ALL {
            session.replace_items(kind, store.load_or_default(kind));
        }
        session
    }

    pub fn items(&self, kind: ChecklistKind) -> &[ChecklistItem] {
        match kind {
            ChecklistKind::Required => &self.required_checks,
            ChecklistKind::GoodPoint => &self.good_points,
            ChecklistKind::Advice => &self.advice_items,
        }
    }

    /// Swap in a new list and reset the selection state tied to it
    pub fn replace_items(&mut self, kind: ChecklistKind, items: Vec<ChecklistItem>) {
        match kind {
            ChecklistKind::Required => {
                self.required_answers = RequiredAnswers::for_items(&items);
                self.required_checks = items;
            }
            ChecklistKind::GoodPoint => {
                self.good_selection.clear();
                self.good_points = items;
            }
            ChecklistKind::Advice => {
                self.advice_selection.clear();
                self.advice_items = items;
            }
        }
    }

    /// Replace a list and persist it
    ///
    /// The in-memory list is replaced even when the write fails.
    pub fn save_items<S: KeyValueStore>(
        &mut self,
        store: &ItemStore<S>,
        kind: ChecklistKind,
        items: Vec<ChecklistItem>,
    ) -> StoreResult<()> {
        self.replace_items(kind, items);
        store.save(kind.storage_key(), self.items(kind))
    }

    pub fn set_required(&mut self, id: &str, passed: bool) {
        self.required_answers.set(id, passed);
    }

    pub fn toggle_good_point(&mut self, id: &str) -> bool {
        self.good_selection.toggle(id)
    }

    pub fn toggle_advice(&mut self, id: &str) -> bool {
        self.advice_selection.toggle(id)
    }

    pub fn set_other_comment(&mut self, comment: impl Into<String>) {
        self.other_comment = comment.into();
    }

    /// Clear every answer, selection and the comment; lists are kept
    pub fn reset(&mut self) {
        self.required_answers = RequiredAnswers::for_items(&self.required_checks);
        self.good_selection.clear();
        self.advice_selection.clear();
        self.other_comment.clear();
    }

    pub fn is_required_passed(&self, id: &str) -> bool {
        self.required_answers.is_passed(id)
    }

    pub fn is_good_point_selected(&self, id: &str) -> bool {
        self.good_selection.contains(id)
    }

    pub fn is_advice_selected(&self, id: &str) -> bool {
        self.advice_selection.contains(id)
    }

    pub fn is_selected(&self, kind: ChecklistKind, id: &str) -> bool {
        match kind {
            ChecklistKind::Required => self.is_required_passed(id),
            ChecklistKind::GoodPoint => self.is_good_point_selected(id),
            ChecklistKind::Advice => self.is_advice_selected(id),
        }
    }

    pub fn all_required_passed(&self) -> bool {
        self.required_answers.all_passed(&self.required_checks)
    }

    pub fn is_resubmit(&self) -> bool {
        !self.all_required_passed()
    }

    pub fn failed_requirements(&self) -> Vec<&ChecklistItem> {
        self.required_answers.failed(&self.required_checks)
    }

    pub fn input(&self) -> FeedbackInput<'_> {
        FeedbackInput {
            required_checks: &self.required_checks,
            required_answers: &self.required_answers,
            good_points: &self.good_points,
            good_selection: &self.good_selection,
            advice_items: &self.advice_items,
            advice_selection: &self.advice_selection,
            other_comment: &self.other_comment,
        }
    }

    /// Feedback text for the current state
    pub fn compose(&self) -> String {
        self.input().compose()
    }
}
