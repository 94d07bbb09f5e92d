//! Fetched resource lists kept in sync with deletes.

use pagewright_api_types::{
    CategoryRecord, ListResponse, MediaItem, MenuRecord, PageRecord, PostRecord, UserRecord,
};
use uuid::Uuid;

pub trait Identified {
    type Id: PartialEq + ?Sized;

    fn id(&self) -> &Self::Id;
}

macro_rules! identified_by_uuid {
    ($($record:ty),* $(,)?) => {
        $(
            impl Identified for $record {
                type Id = Uuid;

                fn id(&self) -> &Uuid {
                    &self.id
                }
            }
        )*
    };
}

identified_by_uuid!(PageRecord, PostRecord, CategoryRecord, MenuRecord, UserRecord);

/// Media files are addressed by file name.
impl Identified for MediaItem {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    items: Vec<T>,
    total: u64,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }
}

impl<T: Identified> ResourceList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self { items, total }
    }

    pub fn from_response(response: ListResponse<T>) -> Self {
        Self {
            total: response.total.max(response.data.len() as u64),
            items: response.data,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Drop a row after the server confirmed its deletion.
    pub fn remove_local(&mut self, id: &T::Id) -> bool {
        let Some(position) = self.items.iter().position(|item| item.id() == id) else {
            return false;
        };
        self.items.remove(position);
        self.total = self.total.saturating_sub(1);
        true
    }

    pub fn replace(&mut self, response: ListResponse<T>) {
        *self = Self::from_response(response);
    }
}
