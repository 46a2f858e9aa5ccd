//! Frontend Models
//!
//! Display copy for each checklist section.

use feedback_core::ChecklistKind;

/// Placeholder for the generated sentence field
pub const TEXT_LABEL: &str = "生成される文章";
/// Placeholder for the failure sentence field
pub const ERROR_TEXT_LABEL: &str = "NGの場合に表示される文章";

/// Static text and styling for one checklist card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub hint: &'static str,
    pub editor_title: &'static str,
    /// CSS modifier, e.g. `card good`
    pub class: &'static str,
}

pub fn section(kind: ChecklistKind) -> Section {
    match kind {
        ChecklistKind::Required => Section {
            title: "判定用チェック",
            hint: "NGが1つでもあれば再提出になります",
            editor_title: "判定用チェック項目の編集",
            class: "required",
        },
        ChecklistKind::GoodPoint => Section {
            title: "良かった点",
            hint: "該当する項目にチェックを入れてね",
            editor_title: "良かった点の編集",
            class: "good",
        },
        ChecklistKind::Advice => Section {
            title: "今後に向けたアドバイス",
            hint: "改善点があればチェックしてね",
            editor_title: "アドバイス項目の編集",
            class: "advice",
        },
    }
}
