//! Navigation menu items as edited in the admin.

use pagewright_api_types::MenuItem;

use super::error::DomainError;
use super::ordering::{Direction, swap_with_neighbour};

pub const DEFAULT_TARGET: &str = "_self";
pub const TARGETS: [&str; 2] = ["_self", "_blank"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemField {
    Label(String),
    Url(String),
    Target(String),
}

/// Ordered top-level items of one menu. Nested `children` ride along
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItems {
    items: Vec<MenuItem>,
}

impl MenuItems {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<MenuItem> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add(&mut self) {
        self.items.push(MenuItem {
            target: Some(DEFAULT_TARGET.to_string()),
            ..MenuItem::default()
        });
    }

    pub fn update(&mut self, index: usize, field: MenuItemField) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        match field {
            MenuItemField::Label(label) => item.label = label,
            MenuItemField::Url(url) => item.url = url,
            MenuItemField::Target(target) => item.target = Some(target),
        }
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    pub fn move_item(&mut self, index: usize, direction: Direction) -> bool {
        swap_with_neighbour(&mut self.items, index, direction)
    }

    /// First item lacking a label or URL, reported 1-based.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self
            .items
            .iter()
            .position(|item| item.label.is_empty() || item.url.is_empty())
        {
            Some(index) => Err(DomainError::incomplete_menu_item(index + 1)),
            None => Ok(()),
        }
    }
}
