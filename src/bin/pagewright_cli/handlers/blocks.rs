#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use pagewright::application::editor::{
    BlockEditor, EditError, FieldChange, ImageInput, apply_change, attach_image, render,
};
use pagewright::application::forms::{PageForm, PostForm};
use pagewright::presentation::editor::render_editor;
use tracing::debug;
use uuid::Uuid;

use crate::args::{BlockTarget, BlocksCmd};
use crate::client::{CliError, Ctx};
use crate::io::{file_name, read_bytes, write_text};
use crate::print::{print_json, print_lines};

/// The page or post whose blocks are being edited.
pub enum BlockDocument {
    Page { id: Uuid, form: PageForm },
    Post { id: Uuid, form: PostForm },
}

impl BlockDocument {
    pub async fn load(ctx: &Ctx, target: BlockTarget) -> Result<Self, CliError> {
        match (target.page, target.post) {
            (Some(id), _) => {
                let page = ctx.api.get_page(id).await?;
                Ok(Self::Page {
                    id,
                    form: PageForm::from_page(&page)?,
                })
            }
            (None, Some(id)) => {
                let post = ctx.api.get_post(id).await?;
                Ok(Self::Post {
                    id,
                    form: PostForm::from_post(&post)?,
                })
            }
            (None, None) => Err(CliError::InvalidInput(
                "either --page or --post is required".into(),
            )),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Page { form, .. } => &form.title,
            Self::Post { form, .. } => &form.title,
        }
    }

    pub fn editor(&self) -> &BlockEditor {
        match self {
            Self::Page { form, .. } => &form.blocks,
            Self::Post { form, .. } => &form.blocks,
        }
    }

    pub fn editor_mut(&mut self) -> &mut BlockEditor {
        match self {
            Self::Page { form, .. } => &mut form.blocks,
            Self::Post { form, .. } => &mut form.blocks,
        }
    }

    /// Write the whole document back with its current block sequence.
    pub async fn save(&self, ctx: &Ctx) -> Result<(), CliError> {
        match self {
            Self::Page { id, form } => {
                ctx.api.update_page(*id, &form.to_payload()?).await?;
            }
            Self::Post { id, form } => {
                ctx.api.update_post(*id, &form.to_payload()?).await?;
            }
        }
        Ok(())
    }
}

pub async fn handle(ctx: &Ctx, target: BlockTarget, cmd: BlocksCmd) -> Result<(), CliError> {
    let mut doc = BlockDocument::load(ctx, target).await?;

    let changed = match cmd {
        BlocksCmd::List => {
            print_summary(doc.editor());
            return Ok(());
        }
        BlocksCmd::Show { index } => {
            let block = doc
                .editor()
                .blocks()
                .get(index)
                .ok_or(EditError::NoSuchBlock { index })?;
            return print_json(&render(block));
        }
        BlocksCmd::Preview { out } => return preview(&doc, out),
        BlocksCmd::Add { block_type } => doc.editor_mut().add(block_type),
        BlocksCmd::Set {
            index,
            field,
            value,
        } => apply_change(doc.editor_mut(), index, FieldChange::parse_set(&field, value)?)?,
        BlocksCmd::AddItem { index, list } => {
            apply_change(doc.editor_mut(), index, FieldChange::parse_add(&list)?)?
        }
        BlocksCmd::RemoveItem { index, item } => {
            apply_change(doc.editor_mut(), index, FieldChange::parse_remove(&item)?)?
        }
        BlocksCmd::Move { index, direction } => {
            ensure_block(doc.editor(), index)?;
            doc.editor_mut().move_block(index, direction)
        }
        BlocksCmd::Remove { index } => {
            ensure_block(doc.editor(), index)?;
            doc.editor_mut().remove(index)
        }
        BlocksCmd::Image {
            index,
            field,
            file,
            url,
        } => {
            let input = image_input(file, url)?;
            let stored = attach_image(doc.editor_mut(), index, &field, input, &ctx.api).await?;
            println!("{stored}");
            true
        }
    };

    if changed {
        doc.save(ctx).await?;
    } else {
        debug!("block sequence unchanged; nothing to save");
    }
    print_summary(doc.editor());
    Ok(())
}

fn ensure_block(editor: &BlockEditor, index: usize) -> Result<(), CliError> {
    if index < editor.len() {
        Ok(())
    } else {
        Err(EditError::NoSuchBlock { index }.into())
    }
}

fn image_input(file: Option<PathBuf>, url: Option<String>) -> Result<ImageInput, CliError> {
    match (file, url) {
        (Some(path), _) => Ok(ImageInput::File {
            name: file_name(&path)?,
            bytes: read_bytes(&path)?,
        }),
        (None, Some(url)) => Ok(ImageInput::Url(url)),
        (None, None) => Err(CliError::InvalidInput("--file or --url is required".into())),
    }
}

fn preview(doc: &BlockDocument, out: Option<PathBuf>) -> Result<(), CliError> {
    let html = render_editor(doc.title(), doc.editor().blocks())?;
    match out {
        Some(path) => write_text(&path, &html),
        None => {
            println!("{html}");
            Ok(())
        }
    }
}

fn print_summary(editor: &BlockEditor) {
    if editor.is_empty() {
        println!("{}", pagewright::application::editor::EMPTY_MESSAGE);
        return;
    }
    print_lines(
        editor
            .blocks()
            .iter()
            .enumerate()
            .map(|(index, block)| format!("{index}\t{}\t{}", block.id, block.kind())),
    );
}
