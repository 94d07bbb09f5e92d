//! Wire types exchanged with the Pagewright content API.
//!
//! Block sequences travel as opaque JSON: pages carry them as a JSON array
//! (`blocks`), posts as JSON text (`content`). Decoding into typed blocks is
//! the caller's concern, so these types keep the raw payload intact.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
            PageStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
            PostStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[default]
    Editor,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
        }
    }
}

/// Paginated list envelope returned by every collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

/// Error envelope (`{"error": "...", "code": 400}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: Uuid,
    #[serde(default)]
    pub tenant_id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub blocks: Option<Box<RawValue>>,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default)]
    pub meta: Option<Box<RawValue>>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
}

/// Body for both `POST /v1/pages` and `PUT /v1/pages/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    pub slug: String,
    pub title: String,
    pub blocks: Box<RawValue>,
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSummary {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// JSON text holding the block array; empty when the post has no blocks.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub author_id: Option<Uuid>,
    #[serde(default)]
    pub author: Option<AuthorSummary>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub category_ids: Vec<Uuid>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRequest {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub featured_image: String,
    pub status: PostStatus,
    pub category_ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub name: String,
    pub slug: String,
    pub description: String,
}

/// A navigation entry; entries nest through `children`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRequest {
    pub name: String,
    pub description: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
}

/// The authenticated user as reported by `/auth/login` and `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub favicon: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_menu_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_menu_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type", default)]
    pub content_type: String,
}

impl MediaItem {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub pages: u64,
    #[serde(default)]
    pub users: u64,
    #[serde(default)]
    pub media: u64,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub categories: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: DashboardStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFromUrlRequest {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_record_keeps_blocks_verbatim() {
        let raw = r#"{
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "slug": "about",
            "title": "About",
            "blocks": [{"id":"b1","type":"gallery","data":{"z":1,"a":[2,3]}}],
            "status": "published",
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00.123456+02:00",
            "published_at": null
        }"#;

        let page: PageRecord = serde_json::from_str(raw).expect("page");
        assert_eq!(page.status, PageStatus::Published);
        assert_eq!(
            page.blocks.expect("blocks").get(),
            r#"[{"id":"b1","type":"gallery","data":{"z":1,"a":[2,3]}}]"#
        );
        assert!(page.published_at.is_none());
    }

    #[test]
    fn media_item_maps_type_field() {
        let item: MediaItem =
            serde_json::from_str(r#"{"name":"a.png","url":"/uploads/a.png","size":12,"type":"image/png"}"#)
                .expect("media");
        assert!(item.is_image());
    }

    #[test]
    fn user_request_omits_blank_password() {
        let body = serde_json::to_value(UserRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: None,
            role: UserRole::Admin,
        })
        .expect("json");
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], "admin");
    }

    #[test]
    fn list_response_tolerates_missing_data() {
        let list: ListResponse<MediaItem> = serde_json::from_str(r#"{"total":0}"#).expect("list");
        assert!(list.data.is_empty());
    }
}
