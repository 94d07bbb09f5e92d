//! Block editor views: the block list with its move/remove controls, one
//! card per block, and the add-block menu.

use askama::Template;

use crate::application::editor::{self, BlockView, FieldKind, FieldView, FormView, render};
use crate::domain::blocks::{Block, BlockType};

use super::views::{TemplateRenderError, render_template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Field,
    ListHeading,
    ItemHeading,
    Empty,
    AddButton,
}

/// One row of a flattened block form. Nested lists become indented rows.
#[derive(Debug, Clone)]
pub struct FormLineView {
    kind: LineKind,
    pub depth: usize,
    pub name: String,
    pub label: String,
    pub input: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
    pub checked: bool,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl FormLineView {
    fn marker(kind: LineKind, depth: usize, name: &str, label: &str) -> Self {
        Self {
            kind,
            depth,
            name: name.to_string(),
            label: label.to_string(),
            input: "",
            required: false,
            placeholder: "",
            value: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    fn field(depth: usize, field: &FieldView) -> Self {
        Self {
            kind: LineKind::Field,
            depth,
            name: field.name.clone(),
            label: field.label.to_string(),
            input: field.kind.as_str(),
            required: field.required,
            placeholder: field.placeholder,
            value: field.value.clone(),
            checked: field.is_checked(),
            options: field
                .options
                .iter()
                .map(|option| OptionView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                    selected: option.selected,
                })
                .collect(),
        }
    }

    pub fn is_field(&self) -> bool {
        self.kind == LineKind::Field
    }

    pub fn is_list_heading(&self) -> bool {
        self.kind == LineKind::ListHeading
    }

    pub fn is_item_heading(&self) -> bool {
        self.kind == LineKind::ItemHeading
    }

    pub fn is_empty_notice(&self) -> bool {
        self.kind == LineKind::Empty
    }

    pub fn is_add_button(&self) -> bool {
        self.kind == LineKind::AddButton
    }

    pub fn is_textarea(&self) -> bool {
        self.input == FieldKind::TextArea.as_str()
    }

    pub fn is_select(&self) -> bool {
        self.input == FieldKind::Select.as_str()
    }

    pub fn is_checkbox(&self) -> bool {
        self.input == FieldKind::Checkbox.as_str()
    }

    /// HTML input type for single-line inputs.
    pub fn html_type(&self) -> &'static str {
        match self.input {
            "url" | "image" => "url",
            _ => "text",
        }
    }
}

fn flatten(form: &FormView, depth: usize, lines: &mut Vec<FormLineView>) {
    lines.extend(form.fields.iter().map(|field| FormLineView::field(depth, field)));
    for list in &form.lists {
        lines.push(FormLineView::marker(
            LineKind::ListHeading,
            depth,
            &list.name,
            list.label,
        ));
        if list.items.is_empty() {
            lines.push(FormLineView::marker(
                LineKind::Empty,
                depth + 1,
                &list.name,
                list.empty_message,
            ));
        }
        for (index, item) in list.items.iter().enumerate() {
            lines.push(FormLineView::marker(
                LineKind::ItemHeading,
                depth + 1,
                &format!("{}.{index}", list.name),
                &item.title,
            ));
            flatten(item, depth + 1, lines);
        }
        lines.push(FormLineView::marker(
            LineKind::AddButton,
            depth,
            &list.name,
            list.add_label,
        ));
    }
}

#[derive(Debug, Clone)]
pub struct BlockCardView {
    pub index: usize,
    pub id: String,
    pub kind: String,
    pub heading: String,
    pub notice: Option<String>,
    pub lines: Vec<FormLineView>,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

impl BlockCardView {
    pub fn new(index: usize, len: usize, block: &Block) -> Self {
        let view = render(block);
        let mut lines = Vec::new();
        let notice = match &view {
            BlockView::Form { form, .. } => {
                flatten(form, 0, &mut lines);
                None
            }
            BlockView::Malformed { reason, .. } => {
                Some(format!("The stored data could not be read: {reason}"))
            }
            BlockView::Unknown { .. } => {
                Some("This block is kept as-is and cannot be edited here.".to_string())
            }
        };
        Self {
            index,
            id: block.id.to_string(),
            kind: block.kind().to_string(),
            heading: view.heading(),
            notice,
            lines,
            can_move_up: index > 0,
            can_move_down: index + 1 < len,
        }
    }

    pub fn position(&self) -> usize {
        self.index + 1
    }
}

#[derive(Debug, Clone)]
pub struct BlockTypeOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Template)]
#[template(path = "editor/block_editor.html")]
pub struct BlockEditorTemplate {
    pub title: String,
    pub blocks: Vec<BlockCardView>,
    pub empty_message: &'static str,
    pub block_types: Vec<BlockTypeOptionView>,
}

impl BlockEditorTemplate {
    pub fn new(title: impl Into<String>, blocks: &[Block]) -> Self {
        Self {
            title: title.into(),
            blocks: blocks
                .iter()
                .enumerate()
                .map(|(index, block)| BlockCardView::new(index, blocks.len(), block))
                .collect(),
            empty_message: editor::EMPTY_MESSAGE,
            block_types: BlockType::ALL
                .iter()
                .map(|block_type| BlockTypeOptionView {
                    value: block_type.as_str(),
                    label: block_type.label(),
                    description: block_type.description(),
                })
                .collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "editor/block.html")]
pub struct BlockTemplate {
    pub block: BlockCardView,
}

pub fn render_editor(title: &str, blocks: &[Block]) -> Result<String, TemplateRenderError> {
    render_template(&BlockEditorTemplate::new(title, blocks))
}

/// Render the block at `index` on its own, or `None` when out of range.
pub fn render_block(blocks: &[Block], index: usize) -> Option<Result<String, TemplateRenderError>> {
    let block = blocks.get(index)?;
    let template = BlockTemplate {
        block: BlockCardView::new(index, blocks.len(), block),
    };
    Some(render_template(&template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::editor::{BlockEditor, FieldChange, apply_change};
    use crate::domain::blocks::decode_blocks;

    #[test]
    fn empty_editor_shows_the_empty_message_and_every_block_type() {
        let html = render_editor("Home", &[]).expect("render");
        assert!(html.contains("No blocks yet. Add your first block below."));
        assert!(html.contains("Call to Action"));
        assert!(html.contains(r#"value="testimonial""#));
    }

    #[test]
    fn boundary_controls_are_disabled() {
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Hero);
        editor.add(BlockType::Text);

        let first = BlockCardView::new(0, 2, &editor.blocks()[0]);
        let last = BlockCardView::new(1, 2, &editor.blocks()[1]);
        assert!(!first.can_move_up && first.can_move_down);
        assert!(last.can_move_up && !last.can_move_down);
    }

    #[test]
    fn nested_lists_flatten_with_depth() {
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Pricing);
        apply_change(&mut editor, 0, FieldChange::add_item("plans")).expect("plan");
        apply_change(
            &mut editor,
            0,
            FieldChange::edit_item("plans", 0, FieldChange::add_item("features")),
        )
        .expect("feature");

        let card = BlockCardView::new(0, 1, &editor.blocks()[0]);
        let feature_value = card
            .lines
            .iter()
            .find(|line| line.is_field() && line.name == "plans.0.features.0.value")
            .expect("feature field");
        assert_eq!(feature_value.depth, 2);
        assert!(card.lines.iter().any(|line| line.is_add_button() && line.name == "plans"));
    }

    #[test]
    fn unknown_block_renders_a_placeholder_with_escaped_kind() {
        let blocks = decode_blocks(r#"[{"id":"x","type":"<marquee>","data":{}}]"#).expect("decode");
        let html = render_block(&blocks, 0).expect("in range").expect("render");
        assert!(html.contains("Unknown Block Type: &#60;marquee&#62;") || html.contains("Unknown Block Type: &lt;marquee&gt;"));
        assert!(!html.contains("<marquee>"));
        assert!(render_block(&blocks, 1).is_none());
    }
}
