pub mod category;
mod error;
pub mod form;
pub mod gate;
pub mod identity;
pub mod notice;
pub mod session;
pub mod validation;

pub use category::{Category, CategoryDraft, CategoryFields, CategoryId};
pub use error::{Error, Result};
pub use identity::IdentitySnapshot;
pub use session::{ClientSession, Principal, SESSION_COOKIE_NAME, UserSession};
