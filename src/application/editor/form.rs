//! Form view model shared by every block editor.
//!
//! A [`FormView`] describes the inputs an editor shows for one payload; a
//! [`FieldChange`] carries one edit back. Field names are dotted paths
//! relative to the block (`items.0.title`), so nested sub-list items address
//! the same way in HTML forms and on the command line.

use serde::Serialize;
use thiserror::Error;

use super::repeater::Repeater;
use crate::domain::blocks::{BlockContent, BlockType, ChoiceError};

/// Field name used for sub-list items that are a bare string.
pub const ITEM_VALUE: &str = "value";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Url,
    /// URL produced by an image upload.
    Image,
    Select,
    Checkbox,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::TextArea => "textarea",
            FieldKind::Url => "url",
            FieldKind::Image => "image",
            FieldKind::Select => "select",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: String,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FieldView {
    pub fn new(name: &str, label: &'static str, kind: FieldKind, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            label,
            kind,
            required: false,
            placeholder: "",
            value: value.into(),
            options: Vec::new(),
        }
    }

    pub fn text(name: &str, label: &'static str, value: &str) -> Self {
        Self::new(name, label, FieldKind::Text, value)
    }

    pub fn optional_text(name: &str, label: &'static str, value: Option<&String>) -> Self {
        Self::new(name, label, FieldKind::Text, value.map_or("", String::as_str))
    }

    pub fn checkbox(name: &str, label: &'static str, checked: bool) -> Self {
        Self::new(name, label, FieldKind::Checkbox, checked.to_string())
    }

    /// Select over `(value, label)` pairs with `current` pre-selected.
    pub fn select<'a>(
        name: &str,
        label: &'static str,
        current: &str,
        choices: impl IntoIterator<Item = (&'a str, String)>,
    ) -> Self {
        let options = choices
            .into_iter()
            .map(|(value, label)| SelectOption {
                selected: value == current,
                value: value.to_string(),
                label,
            })
            .collect();
        Self {
            options,
            ..Self::new(name, label, FieldKind::Select, current)
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn is_checked(&self) -> bool {
        self.kind == FieldKind::Checkbox && self.value == "true"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub name: String,
    pub label: &'static str,
    pub add_label: &'static str,
    pub empty_message: &'static str,
    pub items: Vec<FormView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub title: String,
    pub fields: Vec<FieldView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<ListView>,
}

impl FormView {
    pub fn new(title: impl Into<String>, fields: Vec<FieldView>) -> Self {
        Self {
            title: title.into(),
            fields,
            lists: Vec::new(),
        }
    }

    pub fn with_list(mut self, list: ListView) -> Self {
        self.lists.push(list);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Re-root every field and list name under `prefix`.
    pub fn prefixed(mut self, prefix: &str) -> Self {
        for field in &mut self.fields {
            field.name = format!("{prefix}.{}", field.name);
        }
        for list in &mut self.lists {
            list.name = format!("{prefix}.{}", list.name);
            list.items = std::mem::take(&mut list.items)
                .into_iter()
                .map(|item| item.prefixed(prefix))
                .collect();
        }
        self
    }
}

/// One edit to a payload, addressed relative to the block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Set { field: String, value: String },
    AddItem { list: String },
    RemoveItem { list: String, index: usize },
    EditItem {
        list: String,
        index: usize,
        change: Box<FieldChange>,
    },
}

impl FieldChange {
    pub fn set(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn add_item(list: impl Into<String>) -> Self {
        Self::AddItem { list: list.into() }
    }

    pub fn remove_item(list: impl Into<String>, index: usize) -> Self {
        Self::RemoveItem {
            list: list.into(),
            index,
        }
    }

    pub fn edit_item(list: impl Into<String>, index: usize, change: FieldChange) -> Self {
        Self::EditItem {
            list: list.into(),
            index,
            change: Box::new(change),
        }
    }

    /// List this change targets, if it is a sub-list operation.
    pub fn list(&self) -> Option<&str> {
        match self {
            FieldChange::Set { .. } => None,
            FieldChange::AddItem { list }
            | FieldChange::RemoveItem { list, .. }
            | FieldChange::EditItem { list, .. } => Some(list),
        }
    }

    /// `title`, `items.0.title`, or `plans.1.features.0` (bare string item).
    pub fn parse_set(path: &str, value: impl Into<String>) -> Result<Self, EditError> {
        let (nesting, tail) = split_path(path)?;
        let leaf = FieldChange::set(tail.unwrap_or(ITEM_VALUE), value);
        Ok(wrap(nesting, leaf))
    }

    /// `items` or `plans.0.features`.
    pub fn parse_add(path: &str) -> Result<Self, EditError> {
        let (nesting, tail) = split_path(path)?;
        let list = tail.ok_or_else(|| EditError::InvalidPath(path.to_string()))?;
        Ok(wrap(nesting, FieldChange::add_item(list)))
    }

    /// `items.2` or `plans.0.features.1`.
    pub fn parse_remove(path: &str) -> Result<Self, EditError> {
        let (mut nesting, tail) = split_path(path)?;
        if tail.is_some() {
            return Err(EditError::InvalidPath(path.to_string()));
        }
        let (list, index) = nesting
            .pop()
            .ok_or_else(|| EditError::InvalidPath(path.to_string()))?;
        Ok(wrap(nesting, FieldChange::remove_item(list, index)))
    }
}

fn split_path(path: &str) -> Result<(Vec<(&str, usize)>, Option<&str>), EditError> {
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(EditError::InvalidPath(path.to_string()));
    }

    let mut nesting = Vec::new();
    let mut rest = parts.as_slice();
    while let [list, index, tail @ ..] = rest {
        let index = index
            .parse::<usize>()
            .map_err(|_| EditError::InvalidPath(path.to_string()))?;
        nesting.push((*list, index));
        rest = tail;
    }

    Ok((nesting, rest.first().copied()))
}

fn wrap(nesting: Vec<(&str, usize)>, leaf: FieldChange) -> FieldChange {
    nesting
        .into_iter()
        .rev()
        .fold(leaf, |change, (list, index)| {
            FieldChange::edit_item(list, index, change)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("{form} has no field `{field}`")]
    UnknownField { form: &'static str, field: String },
    #[error("{form} has no list `{list}`")]
    UnknownList { form: &'static str, list: String },
    #[error("`{list}` has no item {index}")]
    ItemOutOfRange { list: String, index: usize },
    #[error(transparent)]
    InvalidChoice(#[from] ChoiceError),
    #[error("`{field}` expects true or false, got `{value}`")]
    InvalidFlag { field: String, value: String },
    #[error("invalid field path `{0}`")]
    InvalidPath(String),
    #[error("block {index} does not exist")]
    NoSuchBlock { index: usize },
    #[error("`{kind}` blocks cannot be edited")]
    NotEditable { kind: String },
}

impl EditError {
    pub fn unknown_field(form: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            form,
            field: field.into(),
        }
    }

    pub fn unknown_list(form: &'static str, list: impl Into<String>) -> Self {
        Self::UnknownList {
            form,
            list: list.into(),
        }
    }
}

/// Typed editor for one block payload.
pub trait BlockForm: Sized {
    const BLOCK_TYPE: BlockType;

    fn form(&self) -> FormView;

    /// Parse the raw input for one field and return the patched payload.
    fn apply(&self, change: FieldChange) -> Result<Self, EditError>;

    fn into_content(self) -> BlockContent;
}

/// Editor for one entry of a block's sub-list.
pub trait ItemForm: Clone {
    const NAME: &'static str;
    const ADD_LABEL: &'static str;
    const EMPTY_MESSAGE: &'static str;

    fn empty() -> Self;

    fn form(&self) -> FormView;

    fn apply(&self, change: FieldChange) -> Result<Self, EditError>;
}

pub fn repeater_for<T: ItemForm>(items: &[T]) -> Repeater<T> {
    Repeater::new(items.to_vec()).with_labels(T::ADD_LABEL, T::EMPTY_MESSAGE)
}

pub fn list_view<T: ItemForm>(name: &str, label: &'static str, items: &[T]) -> ListView {
    let repeater = repeater_for(items);
    ListView {
        name: name.to_string(),
        label,
        add_label: repeater.add_label(),
        empty_message: repeater.empty_message(),
        items: repeater
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let mut form = item.form().prefixed(&format!("{name}.{index}"));
                form.title = format!("#{}", index + 1);
                form
            })
            .collect(),
    }
}

/// Run a sub-list change through a [`Repeater`] and return the new list.
pub fn edit_list<T: ItemForm>(items: &[T], change: FieldChange) -> Result<Vec<T>, EditError> {
    let mut repeater = repeater_for(items);
    match change {
        FieldChange::AddItem { .. } => repeater.add(T::empty()),
        FieldChange::RemoveItem { list, index } => {
            if !repeater.remove(index) {
                return Err(EditError::ItemOutOfRange { list, index });
            }
        }
        FieldChange::EditItem {
            list,
            index,
            change,
        } => {
            let updated = repeater
                .get(index)
                .ok_or_else(|| EditError::ItemOutOfRange {
                    list: list.clone(),
                    index,
                })?
                .apply(*change)?;
            repeater.edit(index, updated);
        }
        FieldChange::Set { field, .. } => return Err(EditError::InvalidPath(field)),
    }
    Ok(repeater.into_items())
}

pub fn parse_flag(field: &str, value: &str) -> Result<bool, EditError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        _ => Err(EditError::InvalidFlag {
            field: field.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_paths_nest_through_lists() {
        assert_eq!(
            FieldChange::parse_set("title", "Hi").expect("path"),
            FieldChange::set("title", "Hi")
        );
        assert_eq!(
            FieldChange::parse_set("plans.1.features.0", "SSO").expect("path"),
            FieldChange::edit_item(
                "plans",
                1,
                FieldChange::edit_item("features", 0, FieldChange::set(ITEM_VALUE, "SSO"))
            )
        );
    }

    #[test]
    fn add_and_remove_paths() {
        assert_eq!(
            FieldChange::parse_add("plans.0.features").expect("path"),
            FieldChange::edit_item("plans", 0, FieldChange::add_item("features"))
        );
        assert_eq!(
            FieldChange::parse_remove("items.2").expect("path"),
            FieldChange::remove_item("items", 2)
        );
        assert!(FieldChange::parse_remove("items").is_err());
        assert!(FieldChange::parse_add("items.0").is_err());
        assert!(FieldChange::parse_set("items..title", "x").is_err());
        assert!(FieldChange::parse_set("items.first.title", "x").is_err());
    }

    #[test]
    fn prefixed_forms_rename_nested_fields() {
        let inner = FormView::new("#1", vec![FieldView::text(ITEM_VALUE, "Feature", "SSO")]);
        let plan = FormView::new("#1", vec![FieldView::text("name", "Plan Name", "Pro")]).with_list(
            ListView {
                name: "features".into(),
                label: "Features",
                add_label: "+ Add Feature",
                empty_message: "",
                items: vec![inner.prefixed("features.0")],
            },
        );

        let form = plan.prefixed("plans.1");
        assert_eq!(form.fields[0].name, "plans.1.name");
        assert_eq!(form.lists[0].name, "plans.1.features");
        assert_eq!(form.lists[0].items[0].fields[0].name, "plans.1.features.0.value");
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("autoplay", "on"), Ok(true));
        assert_eq!(parse_flag("autoplay", "False"), Ok(false));
        assert!(parse_flag("autoplay", "maybe").is_err());
    }
}
