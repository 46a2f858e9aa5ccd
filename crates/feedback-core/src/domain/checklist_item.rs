//! Checklist Item Entity
//!
//! A single toggleable entry in one of the three feedback lists.

use serde::{Deserialize, Serialize};

/// Which list an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChecklistKind {
    /// Pass/fail checks; any failure means a resubmission
    Required,
    /// Positive observations quoted verbatim
    GoodPoint,
    /// Improvement suggestions quoted verbatim
    Advice,
}

impl ChecklistKind {
    pub const ALL: [ChecklistKind; 3] = [
        ChecklistKind::Required,
        ChecklistKind::GoodPoint,
        ChecklistKind::Advice,
    ];

    /// Key under which the list is persisted
    pub fn storage_key(&self) -> &'static str {
        match self {
            ChecklistKind::Required => "feedback-required-checks",
            ChecklistKind::GoodPoint => "feedback-good-points",
            ChecklistKind::Advice => "feedback-advice-items",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistKind::Required => "required",
            ChecklistKind::GoodPoint => "good",
            ChecklistKind::Advice => "advice",
        }
    }

    /// Whether items of this kind carry a generated sentence
    pub fn has_text(&self) -> bool {
        !matches!(self, ChecklistKind::Required)
    }

    /// Whether items of this kind carry a failure sentence
    pub fn has_error_text(&self) -> bool {
        matches!(self, ChecklistKind::Required)
    }
}

/// A checklist entry
///
/// Serialized as `{ id, label, text?, errorText? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique within the owning list, never reused
    pub id: String,
    /// Text shown next to the checkbox
    pub label: String,
    /// Sentence appended to the feedback when selected (good points, advice)
    #[serde(rename = "text", default, skip_serializing_if = "Option::is_none")]
    pub generated_text: Option<String>,
    /// Sentence emitted when this required check fails
    #[serde(rename = "errorText", default, skip_serializing_if = "Option::is_none")]
    pub error_text: Option<String>,
}

impl ChecklistItem {
    /// Create a required check
    pub fn required(id: impl Into<String>, label: impl Into<String>, error_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            generated_text: None,
            error_text: Some(error_text.into()),
        }
    }

    /// Create a good point or advice item
    pub fn with_text(id: impl Into<String>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            generated_text: Some(text.into()),
            error_text: None,
        }
    }

    /// Generated text, if present and non-empty
    pub fn text(&self) -> Option<&str> {
        self.generated_text.as_deref().filter(|t| !t.is_empty())
    }

    /// Error text, if present and non-empty
    pub fn error(&self) -> Option<&str> {
        self.error_text.as_deref().filter(|t| !t.is_empty())
    }
}

/// User input for a new item, before an id is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub label: String,
    pub text: Option<String>,
    pub error_text: Option<String>,
}

impl ItemDraft {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn error_text(mut self, error_text: impl Into<String>) -> Self {
        self.error_text = Some(error_text.into());
        self
    }

    /// Keep only the fields that `kind` uses
    pub fn for_kind(mut self, kind: ChecklistKind) -> Self {
        if !kind.has_text() {
            self.text = None;
        }
        if !kind.has_error_text() {
            self.error_text = None;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let item = ChecklistItem::required("a", "tests pass", "fix tests");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"a","label":"tests pass","errorText":"fix tests"}"#);

        let item = ChecklistItem::with_text("g", "readme", "Nice README.");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"g","label":"readme","text":"Nice README."}"#);
    }

    #[test]
    fn test_missing_optionals_deserialize() {
        let item: ChecklistItem = serde_json::from_str(r#"{"id":"x","label":"bare"}"#).unwrap();
        assert_eq!(item.generated_text, None);
        assert_eq!(item.error_text, None);
    }

    #[test]
    fn test_empty_text_reads_as_none() {
        let item = ChecklistItem::with_text("g", "label", "");
        assert_eq!(item.text(), None);
    }

    #[test]
    fn test_draft_for_kind_drops_foreign_fields() {
        let draft = ItemDraft::new("l").text("t").error_text("e");
        let required = draft.clone().for_kind(ChecklistKind::Required);
        assert_eq!(required.text, None);
        assert_eq!(required.error_text.as_deref(), Some("e"));

        let advice = draft.for_kind(ChecklistKind::Advice);
        assert_eq!(advice.text.as_deref(), Some("t"));
        assert_eq!(advice.error_text, None);
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(ChecklistKind::Required.storage_key(), "feedback-required-checks");
        assert_eq!(ChecklistKind::GoodPoint.storage_key(), "feedback-good-points");
        assert_eq!(ChecklistKind::Advice.storage_key(), "feedback-advice-items");
    }
}
