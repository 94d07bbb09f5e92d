//! Image-valued fields are filled with a URL returned by an external store.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::info;

use super::BlockEditor;
use super::form::{EditError, FieldChange, FieldKind};
use super::renderer::{BlockView, render};
pub use crate::application::error::BoxError;

/// Stores an image and hands back the URL to put in the block.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn upload(&self, file_name: &str, bytes: Bytes) -> Result<String, BoxError>;

    async fn fetch_from_url(&self, url: &str) -> Result<String, BoxError>;
}

#[derive(Debug, Clone)]
pub enum ImageInput {
    File { name: String, bytes: Bytes },
    Url(String),
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("`{field}` is not an image field")]
    NotAnImageField { field: String },
    #[error("failed to store image: {0}")]
    Store(#[source] BoxError),
    #[error(transparent)]
    Edit(#[from] EditError),
}

/// Store `input` through `source` and write the resulting URL into the
/// image field at `path` of block `index`.
pub async fn attach_image(
    editor: &mut BlockEditor,
    index: usize,
    path: &str,
    input: ImageInput,
    source: &dyn ImageSource,
) -> Result<String, ImageError> {
    let block = editor
        .blocks()
        .get(index)
        .ok_or(EditError::NoSuchBlock { index })?;
    if !is_image_field(&render(block), path) {
        return Err(ImageError::NotAnImageField {
            field: path.to_string(),
        });
    }
    let change_template = FieldChange::parse_set(path, String::new())?;

    let url = match input {
        ImageInput::File { name, bytes } => source.upload(&name, bytes).await,
        ImageInput::Url(url) => source.fetch_from_url(&url).await,
    }
    .map_err(ImageError::Store)?;

    info!(index, field = path, url = %url, "attached image to block");
    super::renderer::apply_change(editor, index, with_value(change_template, &url))?;
    Ok(url)
}

fn is_image_field(view: &BlockView, path: &str) -> bool {
    let BlockView::Form { form, .. } = view else {
        return false;
    };
    let mut pending = vec![form];
    while let Some(form) = pending.pop() {
        if form
            .fields
            .iter()
            .any(|field| field.name == path && field.kind == FieldKind::Image)
        {
            return true;
        }
        pending.extend(form.lists.iter().flat_map(|list| list.items.iter()));
    }
    false
}

fn with_value(change: FieldChange, url: &str) -> FieldChange {
    match change {
        FieldChange::Set { field, .. } => FieldChange::set(field, url),
        FieldChange::EditItem {
            list,
            index,
            change,
        } => FieldChange::edit_item(list, index, with_value(*change, url)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::blocks::{BlockContent, BlockType};

    #[derive(Default)]
    struct RecordingSource {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageSource for RecordingSource {
        async fn upload(&self, file_name: &str, bytes: Bytes) -> Result<String, BoxError> {
            self.calls
                .lock()
                .expect("lock")
                .push(format!("upload:{file_name}:{}", bytes.len()));
            Ok(format!("/uploads/{file_name}"))
        }

        async fn fetch_from_url(&self, url: &str) -> Result<String, BoxError> {
            self.calls.lock().expect("lock").push(format!("fetch:{url}"));
            Err("remote host refused".into())
        }
    }

    #[tokio::test]
    async fn uploaded_file_url_lands_in_the_hero() {
        let source = RecordingSource::default();
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Hero);

        let url = attach_image(
            &mut editor,
            0,
            "image_url",
            ImageInput::File {
                name: "cover.png".into(),
                bytes: Bytes::from_static(b"png"),
            },
            &source,
        )
        .await
        .expect("attach");

        assert_eq!(url, "/uploads/cover.png");
        match &editor.blocks()[0].content {
            BlockContent::Hero(data) => assert_eq!(data.image_url.as_deref(), Some("/uploads/cover.png")),
            other => panic!("expected hero, got {other:?}"),
        }
        assert_eq!(*source.calls.lock().expect("lock"), ["upload:cover.png:3"]);
    }

    #[tokio::test]
    async fn testimonial_avatar_is_addressed_by_path() {
        let source = RecordingSource::default();
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Testimonial);
        super::super::renderer::apply_change(&mut editor, 0, FieldChange::add_item("testimonials"))
            .expect("add");

        attach_image(
            &mut editor,
            0,
            "testimonials.0.avatar_url",
            ImageInput::File {
                name: "ada.jpg".into(),
                bytes: Bytes::from_static(b"jpg"),
            },
            &source,
        )
        .await
        .expect("attach");

        match &editor.blocks()[0].content {
            BlockContent::Testimonial(data) => {
                assert_eq!(data.testimonials[0].avatar_url.as_deref(), Some("/uploads/ada.jpg"));
            }
            other => panic!("expected testimonial, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_image_fields_and_store_failures_are_reported() {
        let source = RecordingSource::default();
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Hero);

        let err = attach_image(&mut editor, 0, "title", ImageInput::Url("https://x".into()), &source)
            .await
            .expect_err("title is text");
        assert!(matches!(err, ImageError::NotAnImageField { .. }));

        let err = attach_image(
            &mut editor,
            0,
            "image_url",
            ImageInput::Url("https://cdn.example/a.png".into()),
            &source,
        )
        .await
        .expect_err("fetch fails");
        assert!(matches!(err, ImageError::Store(_)));
        assert!(source.calls.lock().expect("lock").contains(&"fetch:https://cdn.example/a.png".to_string()));
    }
}
