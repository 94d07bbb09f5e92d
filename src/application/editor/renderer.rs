//! Dispatch from a block's type to its editor.

use serde::Serialize;

use super::BlockEditor;
use super::form::{BlockForm, EditError, FieldChange, FormView};
use crate::domain::blocks::{Block, BlockContent, BlockId, BlockType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum BlockView {
    Form {
        id: BlockId,
        block_type: BlockType,
        form: FormView,
    },
    /// Known type whose stored payload could not be read; shown read-only.
    Malformed {
        id: BlockId,
        block_type: BlockType,
        reason: String,
    },
    /// Placeholder for a type this editor does not know. The block itself
    /// stays in the sequence untouched.
    Unknown { id: BlockId, kind: String },
}

impl BlockView {
    pub fn id(&self) -> &BlockId {
        match self {
            BlockView::Form { id, .. }
            | BlockView::Malformed { id, .. }
            | BlockView::Unknown { id, .. } => id,
        }
    }

    pub fn heading(&self) -> String {
        match self {
            BlockView::Form { block_type, .. } => block_type.label().to_string(),
            BlockView::Malformed { block_type, .. } => {
                format!("Unreadable {} Block", block_type.label())
            }
            BlockView::Unknown { kind, .. } => format!("Unknown Block Type: {kind}"),
        }
    }
}

pub fn render(block: &Block) -> BlockView {
    match &block.content {
        BlockContent::Hero(data) => form_view(block, data),
        BlockContent::Text(data) => form_view(block, data),
        BlockContent::Image(data) => form_view(block, data),
        BlockContent::Features(data) => form_view(block, data),
        BlockContent::Pricing(data) => form_view(block, data),
        BlockContent::Faq(data) => form_view(block, data),
        BlockContent::Testimonial(data) => form_view(block, data),
        BlockContent::Video(data) => form_view(block, data),
        BlockContent::Cta(data) => form_view(block, data),
        BlockContent::Malformed {
            block_type, reason, ..
        } => BlockView::Malformed {
            id: block.id.clone(),
            block_type: *block_type,
            reason: reason.clone(),
        },
        BlockContent::Unknown { kind, .. } => BlockView::Unknown {
            id: block.id.clone(),
            kind: kind.clone(),
        },
    }
}

fn form_view<T: BlockForm>(block: &Block, data: &T) -> BlockView {
    BlockView::Form {
        id: block.id.clone(),
        block_type: T::BLOCK_TYPE,
        form: data.form(),
    }
}

/// Route one field edit through the block's editor and back into the list
/// controller as a whole-payload update.
pub fn apply_change(
    editor: &mut BlockEditor,
    index: usize,
    change: FieldChange,
) -> Result<bool, EditError> {
    let block = editor
        .blocks()
        .get(index)
        .ok_or(EditError::NoSuchBlock { index })?;

    let content = match &block.content {
        BlockContent::Hero(data) => patched(data, change)?,
        BlockContent::Text(data) => patched(data, change)?,
        BlockContent::Image(data) => patched(data, change)?,
        BlockContent::Features(data) => patched(data, change)?,
        BlockContent::Pricing(data) => patched(data, change)?,
        BlockContent::Faq(data) => patched(data, change)?,
        BlockContent::Testimonial(data) => patched(data, change)?,
        BlockContent::Video(data) => patched(data, change)?,
        BlockContent::Cta(data) => patched(data, change)?,
        BlockContent::Malformed { .. } | BlockContent::Unknown { .. } => {
            return Err(EditError::NotEditable {
                kind: block.kind().to_string(),
            });
        }
    };

    Ok(editor.update(index, content))
}

fn patched<T: BlockForm>(data: &T, change: FieldChange) -> Result<BlockContent, EditError> {
    Ok(data.apply(change)?.into_content())
}
