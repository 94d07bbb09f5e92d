//! Host forms: validation and request payloads for each admin screen.

mod categories;
mod menus;
mod pages;
mod posts;
mod profile;
mod settings;
mod users;

use thiserror::Error;

use crate::domain::blocks::CodecError;
use crate::domain::error::DomainError;

pub use categories::CategoryForm;
pub use menus::MenuForm;
pub use pages::PageForm;
pub use posts::PostForm;
pub use profile::ProfileForm;
pub use settings::{SettingsField, SettingsForm};
pub use users::UserForm;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Title and slug are required.")]
    TitleAndSlugRequired,
    #[error("Name and slug are required.")]
    NameAndSlugRequired,
    #[error("Menu name is required")]
    MenuNameRequired,
    #[error("Name and Email are required.")]
    NameAndEmailRequired,
    #[error("Password is required for new users.")]
    PasswordRequired,
    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Site name is required.")]
    SiteNameRequired,
    #[error("unknown setting `{field}`")]
    UnknownSetting { field: String },
    #[error("No changes to save")]
    NoChanges,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Codec(#[from] CodecError),
}

fn password_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LEN
}
