//! Feedback Composition
//!
//! Renders the checklist state into the message pasted on the pull request.
//! The output is a pure function of the input: no clock, no storage.

use crate::domain::{ChecklistItem, RequiredAnswers, Selection};

/// Fixed sentences framing the generated feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases {
    pub greeting: String,
    pub praise: String,
    pub needs_correction: String,
    pub push_to_same_pr: String,
    pub resubmit_advice_intro: String,
    pub ask_freely: String,
    pub congratulations: String,
    pub cleared_advice_intro: String,
    pub keep_going: String,
}

impl Default for Phrases {
    fn default() -> Self {
        Self {
            greeting: "提出ありがとうございます！ 🙇".into(),
            praise: "素晴らしいですね！ ✨".into(),
            needs_correction: "ただ、今回は修正をお願いしたい点があります 🙏".into(),
            push_to_same_pr: "修正が完了したら、同じPull Requestに追加でコミット＆プッシュしてください。新しいPull Requestを作成する必要はありません 👍".into(),
            resubmit_advice_intro: "また、今後に向けてのアドバイスです 💡".into(),
            ask_freely: "分からないことがあれば、遠慮なく質問してくださいね！".into(),
            congratulations: "課題クリアです！おめでとうございます！ 🎉".into(),
            cleared_advice_intro: "今後に向けて、少しだけアドバイスです 💡".into(),
            keep_going: "この調子で次の課題も頑張ってください！ 🔥".into(),
        }
    }
}

/// Everything the composer reads
#[derive(Debug, Clone, Copy)]
pub struct FeedbackInput<'a> {
    pub required_checks: &'a [ChecklistItem],
    pub required_answers: &'a RequiredAnswers,
    pub good_points: &'a [ChecklistItem],
    pub good_selection: &'a Selection,
    pub advice_items: &'a [ChecklistItem],
    pub advice_selection: &'a Selection,
    pub other_comment: &'a str,
}

impl FeedbackInput<'_> {
    pub fn all_required_passed(&self) -> bool {
        self.required_answers.all_passed(self.required_checks)
    }

    pub fn is_resubmit(&self) -> bool {
        !self.all_required_passed()
    }

    /// Compose with the default phrases
    pub fn compose(&self) -> String {
        compose(self, &Phrases::default())
    }
}

/// Render the feedback message
pub fn compose(input: &FeedbackInput<'_>, phrases: &Phrases) -> String {
    let selected_good = input.good_selection.pick(input.good_points);
    // Joined with no separator, matching the texts as authored.
    let good_line: String = selected_good.iter().filter_map(|item| item.text()).collect();
    let selected_advice = input.advice_selection.pick(input.advice_items);
    let failed = input.required_answers.failed(input.required_checks);
    let comment = input.other_comment.trim();

    let mut lines: Vec<&str> = Vec::new();

    lines.push(&phrases.greeting);
    lines.push("");

    if !selected_good.is_empty() {
        lines.push(&good_line);
        lines.push(&phrases.praise);
        lines.push("");
    }

    if !failed.is_empty() {
        lines.push(&phrases.needs_correction);
        lines.push("");

        lines.extend(failed.iter().filter_map(|item| item.error()));
        lines.push("");

        lines.push(&phrases.push_to_same_pr);
        lines.push("");

        push_advice(&mut lines, &phrases.resubmit_advice_intro, &selected_advice, comment);

        lines.push(&phrases.ask_freely);
    } else {
        lines.push(&phrases.congratulations);
        lines.push("");

        push_advice(&mut lines, &phrases.cleared_advice_intro, &selected_advice, comment);

        lines.push(&phrases.keep_going);
    }

    lines.join("\n")
}

/// Advice block: intro, advice texts, free comment, blank line
fn push_advice<'a>(
    lines: &mut Vec<&'a str>,
    intro: &'a str,
    advice: &[&'a ChecklistItem],
    comment: &'a str,
) {
    if advice.is_empty() && comment.is_empty() {
        return;
    }
    lines.push(intro);
    lines.extend(advice.iter().filter_map(|item| item.text()));
    if !comment.is_empty() {
        lines.push(comment);
    }
    lines.push("");
}
