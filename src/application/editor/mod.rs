//! Block list controller and the per-type editors it drives.
//!
//! [`BlockEditor`] holds the working copy of a page's blocks. The host form
//! owns the canonical sequence: it seeds the editor through [`BlockEditor::new`]
//! or [`BlockEditor::reset`] and receives the full sequence through the
//! `on_change` listener after every successful mutation.

pub mod blocks;
pub mod form;
pub mod images;
pub mod renderer;
pub mod repeater;

use std::fmt;

use tracing::debug;

pub use crate::domain::ordering::Direction;
pub use form::{BlockForm, EditError, FieldChange, FieldKind, FieldView, FormView, ItemForm, ListView};
pub use images::{ImageError, ImageInput, ImageSource, attach_image};
pub use renderer::{BlockView, apply_change, render};
pub use repeater::Repeater;

use crate::domain::blocks::{Block, BlockContent, BlockType};
use crate::domain::ordering::swap_with_neighbour;

pub const EMPTY_MESSAGE: &str = "No blocks yet. Add your first block below.";

type ChangeListener = Box<dyn FnMut(&[Block]) + Send>;

#[derive(Default)]
pub struct BlockEditor {
    blocks: Vec<Block>,
    on_change: Option<ChangeListener>,
}

impl BlockEditor {
    pub fn new(initial: Vec<Block>) -> Self {
        Self {
            blocks: initial,
            on_change: None,
        }
    }

    /// Register the host callback; replaces any previous listener.
    pub fn on_change(&mut self, listener: impl FnMut(&[Block]) + Send + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Replace the working copy from the host. Does not notify.
    pub fn reset(&mut self, initial: Vec<Block>) {
        self.blocks = initial;
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block of `block_type` with a fresh id and default payload.
    pub fn add(&mut self, block_type: BlockType) -> bool {
        let block = Block::new(block_type);
        debug!(block_type = block_type.as_str(), id = %block.id, "added block");
        self.blocks.push(block);
        self.emit();
        true
    }

    /// Replace the payload at `index`. The new payload must be of the same
    /// type; id and type never change.
    pub fn update(&mut self, index: usize, content: BlockContent) -> bool {
        let Some(block) = self.blocks.get_mut(index) else {
            debug!(index, "ignored update outside the block list");
            return false;
        };
        if block.kind() != content.kind() {
            debug!(
                index,
                current = block.kind(),
                requested = content.kind(),
                "ignored update that would change the block type"
            );
            return false;
        }
        block.content = content;
        self.emit();
        true
    }

    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.blocks.len() {
            return false;
        }
        let removed = self.blocks.remove(index);
        debug!(index, id = %removed.id, "removed block");
        self.emit();
        true
    }

    /// Swap the block at `index` with its neighbour. Moves past either end
    /// are ignored.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        if !swap_with_neighbour(&mut self.blocks, index, direction) {
            return false;
        }
        debug!(index, direction = direction.as_str(), "moved block");
        self.emit();
        true
    }

    fn emit(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener(&self.blocks);
        }
    }
}

impl fmt::Debug for BlockEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockEditor")
            .field("blocks", &self.blocks)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Clone for BlockEditor {
    /// Clones the blocks only; the listener is not carried over.
    fn clone(&self) -> Self {
        Self::new(self.blocks.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use serde_json::json;

    use super::*;
    use crate::domain::blocks::{HeroData, TextData};

    fn recording_editor(initial: Vec<Block>) -> (BlockEditor, Arc<Mutex<Vec<Vec<Block>>>>) {
        let emitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&emitted);
        let mut editor = BlockEditor::new(initial);
        editor.on_change(move |blocks| sink.lock().expect("lock").push(blocks.to_vec()));
        (editor, emitted)
    }

    fn text(content: &str) -> BlockContent {
        BlockContent::Text(TextData {
            content: content.into(),
            ..TextData::default()
        })
    }

    #[test]
    fn hero_text_scenario() {
        let (mut editor, emitted) = recording_editor(Vec::new());
        assert!(editor.is_empty());

        editor.add(BlockType::Hero);
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.blocks()[0].kind(), "hero");
        assert_eq!(
            serde_json::to_value(&editor.blocks()[0]).expect("json")["data"],
            json!({"title": "", "subtitle": ""})
        );

        let welcome = BlockContent::Hero(HeroData {
            title: "Welcome".into(),
            subtitle: Some("Hi".into()),
            ..HeroData::default()
        });
        assert!(editor.update(0, welcome));
        assert_eq!(
            serde_json::to_value(&editor.blocks()[0]).expect("json")["data"],
            json!({"title": "Welcome", "subtitle": "Hi"})
        );

        editor.add(BlockType::Text);
        assert_eq!(editor.len(), 2);
        assert!(editor.move_block(1, Direction::Up));
        let kinds: Vec<&str> = editor.blocks().iter().map(Block::kind).collect();
        assert_eq!(kinds, ["text", "hero"]);

        assert!(editor.remove(0));
        let kinds: Vec<&str> = editor.blocks().iter().map(Block::kind).collect();
        assert_eq!(kinds, ["hero"]);

        let emitted = emitted.lock().expect("lock");
        assert_eq!(emitted.len(), 5);
        assert_eq!(emitted.last().expect("last").as_slice(), editor.blocks());
    }

    #[test]
    fn boundary_moves_do_not_emit() {
        let (mut editor, emitted) = recording_editor(vec![Block::new(BlockType::Hero), Block::new(BlockType::Cta)]);
        let before = editor.blocks().to_vec();

        assert!(!editor.move_block(0, Direction::Up));
        assert!(!editor.move_block(1, Direction::Down));
        assert!(!editor.move_block(7, Direction::Down));

        assert_eq!(editor.blocks(), before.as_slice());
        assert!(emitted.lock().expect("lock").is_empty());
    }

    #[test]
    fn move_up_then_down_restores_order() {
        let initial: Vec<Block> = [BlockType::Hero, BlockType::Text, BlockType::Image, BlockType::Faq]
            .into_iter()
            .map(Block::new)
            .collect();
        let mut editor = BlockEditor::new(initial.clone());

        for index in 1..initial.len() {
            assert!(editor.move_block(index, Direction::Up));
            assert!(editor.move_block(index - 1, Direction::Down));
            assert_eq!(editor.blocks(), initial.as_slice());
        }
    }

    #[test]
    fn remove_preserves_remaining_order() {
        let initial: Vec<Block> = BlockType::ALL.into_iter().map(Block::new).collect();
        for index in 0..initial.len() {
            let mut editor = BlockEditor::new(initial.clone());
            assert!(editor.remove(index));

            let mut expected = initial.clone();
            expected.remove(index);
            assert_eq!(editor.blocks(), expected.as_slice());
        }
    }

    #[test]
    fn update_changes_only_the_target_payload() {
        let initial = vec![
            Block::new(BlockType::Text),
            Block::new(BlockType::Text),
            Block::new(BlockType::Hero),
        ];
        let mut editor = BlockEditor::new(initial.clone());
        assert!(editor.update(1, text("changed")));

        for (index, (before, after)) in initial.iter().zip(editor.blocks()).enumerate() {
            assert_eq!(before.id, after.id);
            assert_eq!(before.kind(), after.kind());
            if index == 1 {
                assert_eq!(after.content, text("changed"));
            } else {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn guarded_updates_are_ignored() {
        let (mut editor, emitted) = recording_editor(vec![Block::new(BlockType::Hero)]);
        assert!(!editor.update(3, text("x")));
        assert!(!editor.update(0, text("x")));
        assert!(!editor.remove(1));
        assert_eq!(editor.blocks()[0].kind(), "hero");
        assert!(emitted.lock().expect("lock").is_empty());
    }

    #[test]
    fn reset_replaces_blocks_without_emitting() {
        let (mut editor, emitted) = recording_editor(Vec::new());
        editor.reset(vec![Block::new(BlockType::Video)]);
        assert_eq!(editor.len(), 1);
        assert!(emitted.lock().expect("lock").is_empty());
    }
}
