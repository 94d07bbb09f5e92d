//! Add/remove/replace editing for a sub-list inside a block.
//!
//! Items cannot be reordered here; only the top-level block list supports
//! moves.

pub const DEFAULT_ADD_LABEL: &str = "Add Item";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No items yet. Add your first item below.";

#[derive(Debug, Clone, PartialEq)]
pub struct Repeater<T> {
    items: Vec<T>,
    add_label: &'static str,
    empty_message: &'static str,
}

impl<T> Repeater<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            add_label: DEFAULT_ADD_LABEL,
            empty_message: DEFAULT_EMPTY_MESSAGE,
        }
    }

    pub fn with_labels(mut self, add_label: &'static str, empty_message: &'static str) -> Self {
        self.add_label = add_label;
        self.empty_message = empty_message;
        self
    }

    /// Append a caller-built item, usually an empty one.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        true
    }

    /// Replace the item at `index` wholesale. Merging is the caller's job.
    pub fn edit(&mut self, index: usize, item: T) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_label(&self) -> &'static str {
        self.add_label
    }

    pub fn empty_message(&self) -> &'static str {
        self.empty_message
    }
}

impl<T> Default for Repeater<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
