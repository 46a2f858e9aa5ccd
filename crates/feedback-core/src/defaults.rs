//! Built-in checklist content used until the user saves their own lists.

use crate::domain::{ChecklistItem, ChecklistKind};

/// Compiled-in default list for `kind`
pub fn default_items(kind: ChecklistKind) -> Vec<ChecklistItem> {
    match kind {
        ChecklistKind::Required => default_required_checks(),
        ChecklistKind::GoodPoint => default_good_points(),
        ChecklistKind::Advice => default_advice_items(),
    }
}

fn default_required_checks() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::required(
            "test-pass",
            "テストはすべてパスしている",
            "テストが通っていない部分があるようです。エラーメッセージを確認して、修正をお願いします。",
        ),
        ChecklistItem::required(
            "requirements-met",
            "要件（例：5ファイル）を満たしている",
            "要件を満たしていない箇所があるようです。課題の指示を再度確認してみてください。",
        ),
    ]
}

fn default_good_points() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::with_text(
            "good-commit",
            "コミットのタイミングが適切",
            "コミットのタイミングが適切で、作業の流れが分かりやすかったです。",
        ),
        ChecklistItem::with_text(
            "good-readme",
            "READMEがMarkdownで正しく書けている",
            "READMEがMarkdownで正しく書けていて、読みやすくまとまっています。",
        ),
        ChecklistItem::with_text(
            "good-test",
            "テストが通っている",
            "テストがすべて通っており、動作確認がしっかりできています。",
        ),
        ChecklistItem::with_text(
            "good-overall",
            "全体的に丁寧に取り組めている",
            "全体的に丁寧に取り組めていて、コードも読みやすいです。",
        ),
    ]
}

fn default_advice_items() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::with_text(
            "advice-code",
            "コードの書き方",
            "コードの書き方について、変数名や関数の分割など、もう少し工夫できると更に良くなります。",
        ),
        ChecklistItem::with_text(
            "advice-commit",
            "コミットメッセージ",
            "コミットメッセージは、何を変更したかが分かるように書くと、後から見返しやすくなります。",
        ),
        ChecklistItem::with_text(
            "advice-readme",
            "README",
            "READMEには、プロジェクトの概要や使い方を追記すると、より分かりやすくなります。",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        assert_eq!(default_items(ChecklistKind::Required).len(), 2);
        assert_eq!(default_items(ChecklistKind::GoodPoint).len(), 4);
        assert_eq!(default_items(ChecklistKind::Advice).len(), 3);
    }

    #[test]
    fn test_defaults_carry_fields_for_their_kind() {
        for kind in ChecklistKind::ALL {
            for item in default_items(kind) {
                assert_eq!(item.error().is_some(), kind.has_error_text(), "{}", item.id);
                assert_eq!(item.text().is_some(), kind.has_text(), "{}", item.id);
            }
        }
    }
}
