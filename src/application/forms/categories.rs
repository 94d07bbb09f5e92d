use pagewright_api_types::{CategoryRecord, CategoryRequest};

use super::FormError;
use crate::domain::slug::derive_slug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub slug: String,
    pub description: String,
    editing: bool,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_category(category: &CategoryRecord) -> Self {
        Self {
            name: category.name.clone(),
            slug: category.slug.clone(),
            description: category.description.clone(),
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Set the name; while creating, an empty slug is derived from it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        if !self.editing && self.slug.is_empty() {
            self.slug = derive_slug(&self.name).unwrap_or_default();
        }
    }

    pub fn to_payload(&self) -> Result<CategoryRequest, FormError> {
        let name = self.name.trim();
        let slug = self.slug.trim();
        if name.is_empty() || slug.is_empty() {
            return Err(FormError::NameAndSlugRequired);
        }

        Ok(CategoryRequest {
            name: name.to_string(),
            slug: slug.to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_derives_slug_from_name() {
        let mut form = CategoryForm::new();
        form.set_name("Product Updates");
        assert_eq!(form.slug, "product-updates");

        form.set_name("Release Notes");
        assert_eq!(form.slug, "product-updates");
    }

    #[test]
    fn payload_is_trimmed() {
        let mut form = CategoryForm::new();
        form.set_name("  News  ");
        form.description = " Company news ".into();
        let payload = form.to_payload().expect("payload");
        assert_eq!(payload.name, "News");
        assert_eq!(payload.slug, "news");
        assert_eq!(payload.description, "Company news");
    }

    #[test]
    fn name_is_required() {
        let mut form = CategoryForm::new();
        form.set_name("!!!");
        assert!(form.slug.is_empty());
        form.name.clear();
        assert!(matches!(form.to_payload(), Err(FormError::NameAndSlugRequired)));
    }
}
