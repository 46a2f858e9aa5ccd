//! UI Components
//!
//! Reusable Leptos components.

mod required_checks_card;
mod selection_card;
mod other_comment_input;
mod feedback_preview;
mod item_editor_modal;
mod delete_confirm_button;
mod notice_bar;

pub use required_checks_card::RequiredChecksCard;
pub use selection_card::SelectionCard;
pub use other_comment_input::OtherCommentInput;
pub use feedback_preview::FeedbackPreview;
pub use item_editor_modal::ItemEditorModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_bar::NoticeBar;
