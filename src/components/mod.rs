//! UI Components
//!
//! Leptos components for the to-do list page.

mod delete_confirm_button;
mod notice_banner;
mod todo_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use notice_banner::NoticeBanner;
pub use todo_row::TodoRow;
