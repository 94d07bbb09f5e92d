use pagewright_api_types::{PageRecord, PageRequest, PageStatus};
use serde_json::value::RawValue;

use super::FormError;
use crate::application::editor::BlockEditor;
use crate::domain::blocks::{blocks_to_raw, decode_blocks};

#[derive(Debug, Clone, Default)]
pub struct PageForm {
    pub title: String,
    pub slug: String,
    pub status: PageStatus,
    /// Carried through untouched; the admin does not edit it.
    pub meta: Option<Box<RawValue>>,
    pub blocks: BlockEditor,
}

impl PageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_page(page: &PageRecord) -> Result<Self, FormError> {
        let blocks = decode_blocks(page.blocks.as_deref().map_or("", RawValue::get))?;
        Ok(Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            status: page.status,
            meta: page.meta.clone(),
            blocks: BlockEditor::new(blocks),
        })
    }

    pub fn to_payload(&self) -> Result<PageRequest, FormError> {
        if self.title.trim().is_empty() || self.slug.trim().is_empty() {
            return Err(FormError::TitleAndSlugRequired);
        }

        Ok(PageRequest {
            slug: self.slug.clone(),
            title: self.title.clone(),
            blocks: blocks_to_raw(self.blocks.blocks())?,
            status: self.status,
            meta: self.meta.clone(),
        })
    }
}
