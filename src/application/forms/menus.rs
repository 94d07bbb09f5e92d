use pagewright_api_types::{MenuRecord, MenuRequest};

use super::FormError;
use crate::domain::menu::MenuItems;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuForm {
    pub name: String,
    pub description: String,
    pub items: MenuItems,
}

impl MenuForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_menu(menu: &MenuRecord) -> Self {
        Self {
            name: menu.name.clone(),
            description: menu.description.clone(),
            items: MenuItems::new(menu.items.clone()),
        }
    }

    pub fn to_payload(&self) -> Result<MenuRequest, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MenuNameRequired);
        }
        self.items.validate()?;

        Ok(MenuRequest {
            name: self.name.clone(),
            description: self.description.clone(),
            items: self.items.items().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::menu::MenuItemField;

    #[test]
    fn incomplete_items_block_the_payload() {
        let mut form = MenuForm::new();
        assert!(matches!(form.to_payload(), Err(FormError::MenuNameRequired)));

        form.name = "Header".into();
        form.items.add();
        form.items.update(0, MenuItemField::Label("Home".into()));
        let err = form.to_payload().expect_err("missing url");
        assert!(matches!(
            err,
            FormError::Domain(DomainError::IncompleteMenuItem { position: 1 })
        ));
        assert_eq!(err.to_string(), "menu item 1 is missing label or URL");

        form.items.update(0, MenuItemField::Url("/".into()));
        let payload = form.to_payload().expect("payload");
        assert_eq!(payload.items[0].target.as_deref(), Some("_self"));
    }
}
