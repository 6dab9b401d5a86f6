//! UI Components
//!
//! Reusable Leptos components.

mod admin_guard;
mod agency_card;
pub mod confirm_dialog;
mod faq_card;
mod like_button;
mod reply_item;
mod search_bar;
mod sort_select;
pub mod status_dialog;
mod thread_card;

pub use admin_guard::AdminGuard;
pub use agency_card::AgencyCard;
pub use confirm_dialog::{use_confirm, ConfirmDialog, ConfirmService};
pub use faq_card::FaqCard;
pub use like_button::LikeButton;
pub use reply_item::ReplyItem;
pub use search_bar::SearchBar;
pub use sort_select::SortSelect;
pub use status_dialog::{use_status, StatusDialog, StatusService};
pub use thread_card::ThreadCard;
