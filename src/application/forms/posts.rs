use pagewright_api_types::{PostRecord, PostRequest, PostStatus};
use uuid::Uuid;

use super::FormError;
use crate::application::editor::BlockEditor;
use crate::domain::blocks::{decode_blocks, encode_blocks};

#[derive(Debug, Clone, Default)]
pub struct PostForm {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: String,
    pub status: PostStatus,
    pub categories: Vec<Uuid>,
    pub blocks: BlockEditor,
}

impl PostForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when `content` is not a block list, so that a save cannot
    /// replace it with an empty one.
    pub fn from_post(post: &PostRecord) -> Result<Self, FormError> {
        let blocks = decode_blocks(&post.content)?;
        let categories = if post.categories.is_empty() {
            post.category_ids.clone()
        } else {
            post.categories.iter().map(|category| category.id).collect()
        };

        Ok(Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            status: post.status,
            categories,
            blocks: BlockEditor::new(blocks),
        })
    }

    /// Select or deselect a category; returns whether it is now selected.
    pub fn toggle_category(&mut self, id: Uuid) -> bool {
        if let Some(position) = self.categories.iter().position(|selected| *selected == id) {
            self.categories.remove(position);
            false
        } else {
            self.categories.push(id);
            true
        }
    }

    pub fn to_payload(&self) -> Result<PostRequest, FormError> {
        if self.title.trim().is_empty() || self.slug.trim().is_empty() {
            return Err(FormError::TitleAndSlugRequired);
        }

        let content = if self.blocks.is_empty() {
            String::new()
        } else {
            encode_blocks(self.blocks.blocks())?
        };

        Ok(PostRequest {
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            content,
            featured_image: self.featured_image.clone(),
            status: self.status,
            category_ids: self.categories.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::blocks::BlockType;

    fn post(content: &str, extra: Value) -> PostRecord {
        let mut raw = json!({
            "id": "5f0c6c52-3c3c-4d43-9a8e-1b1a7b8f0d11",
            "slug": "launch",
            "title": "Launch",
            "content": content,
            "status": "draft",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        });
        if let (Some(target), Value::Object(extra)) = (raw.as_object_mut(), extra) {
            target.extend(extra);
        }
        serde_json::from_value(raw).expect("post")
    }

    #[test]
    fn empty_block_list_is_sent_as_empty_content() {
        let mut form = PostForm::new();
        form.title = "Launch".into();
        form.slug = "launch".into();

        let payload = form.to_payload().expect("payload");
        assert_eq!(payload.content, "");
        let body = serde_json::to_value(&payload).expect("json");
        assert_eq!(body["category_ids"], json!([]));
    }

    #[test]
    fn content_is_json_text_of_the_blocks() {
        let mut form = PostForm::from_post(&post(
            r#"[{"id":"t","type":"text","data":{"content":"Hello"}}]"#,
            json!({}),
        ))
        .expect("form");
        form.blocks.add(BlockType::Cta);

        let payload = form.to_payload().expect("payload");
        let blocks: Value = serde_json::from_str(&payload.content).expect("content json");
        assert_eq!(blocks[0]["data"]["content"], "Hello");
        assert_eq!(blocks[1]["type"], "cta");
    }

    #[test]
    fn unreadable_content_is_reported() {
        let err = PostForm::from_post(&post("not json", json!({}))).expect_err("bad content");
        assert!(matches!(err, FormError::Codec(_)));
        assert!(PostForm::from_post(&post("", json!({})))
            .expect("blank content")
            .blocks
            .is_empty());
    }

    #[test]
    fn numeric_ids_survive_an_edit() {
        let mut form = PostForm::from_post(&post(
            r#"[{"id":7,"type":"text","data":{"content":"years of writing"}}]"#,
            json!({}),
        ))
        .expect("form");
        form.blocks.add(BlockType::Hero);

        let payload = form.to_payload().expect("payload");
        let blocks: Value = serde_json::from_str(&payload.content).expect("content json");
        assert_eq!(
            blocks[0],
            json!({"id":"7","type":"text","data":{"content":"years of writing"}})
        );
        assert_eq!(blocks[1]["type"], "hero");
    }

    #[test]
    fn categories_prefer_embedded_records() {
        let embedded = "0b7f2a52-9d2e-4bb5-8d63-0f7d3ad0c001";
        let listed = "0b7f2a52-9d2e-4bb5-8d63-0f7d3ad0c002";
        let form = PostForm::from_post(&post(
            "",
            json!({
                "categories": [{
                    "id": embedded,
                    "name": "News",
                    "slug": "news",
                    "created_at": "2024-05-01T10:00:00Z",
                    "updated_at": "2024-05-01T10:00:00Z"
                }],
                "category_ids": [listed]
            }),
        ))
        .expect("form");
        assert_eq!(form.categories, [embedded.parse::<Uuid>().expect("uuid")]);

        let mut form =
            PostForm::from_post(&post("", json!({ "category_ids": [listed] }))).expect("form");
        let listed: Uuid = listed.parse().expect("uuid");
        assert_eq!(form.categories, [listed]);
        assert!(!form.toggle_category(listed));
        assert!(form.categories.is_empty());
        assert!(form.toggle_category(listed));
    }
}
