//! UI Components
//!
//! Leptos components for the movements screen.

mod movements_view;
mod error_banner;
mod filter_bar;
mod movement_table;
mod movement_form_modal;
mod delete_confirm_dialog;

pub use movements_view::MovementsView;
pub use error_banner::ErrorBanner;
pub use filter_bar::FilterBar;
pub use movement_table::MovementTable;
pub use movement_form_modal::MovementFormModal;
pub use delete_confirm_dialog::DeleteConfirmDialog;
