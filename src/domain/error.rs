use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("menu item {position} is missing label or URL")]
    IncompleteMenuItem { position: usize },
}

impl DomainError {
    pub fn incomplete_menu_item(position: usize) -> Self {
        Self::IncompleteMenuItem { position }
    }
}
