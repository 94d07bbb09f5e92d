#![deny(clippy::all, clippy::pedantic)]

pub mod blocks;
pub mod categories;
pub mod media;
pub mod menus;
pub mod pages;
pub mod posts;
pub mod profile;
pub mod settings;
pub mod site;
pub mod users;

use pagewright::domain::slug::{derive_slug, validate_slug};
use tracing::warn;

use crate::client::CliError;

/// An explicit slug wins; otherwise derive one from `source`.
///
/// Explicit slugs are sent as given. One outside the lowercase hyphenated
/// form only gets a warning.
pub fn slug_or_derived(slug: Option<String>, source: &str) -> Result<String, CliError> {
    match slug {
        Some(slug) => {
            if !validate_slug(&slug) {
                warn!(slug = %slug, "slug is not lowercase words joined by hyphens");
            }
            Ok(slug)
        }
        None => derive_slug(source).map_err(|e| CliError::InvalidInput(e.to_string())),
    }
}
