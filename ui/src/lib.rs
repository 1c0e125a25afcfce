//! Components shared across SuiteDesk pages.

mod coming_soon;
mod dialog;
pub mod toast;

pub use coming_soon::ComingSoon;
pub use dialog::Dialog;
pub use toast::{Toaster, Toasts, use_toast_provider, use_toasts};
