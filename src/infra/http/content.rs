use pagewright_api_types::{
    CategoryRecord, CategoryRequest, ListResponse, PageRecord, PageRequest, PostRecord,
    PostRequest, PostStatus,
};
use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use super::{ApiClient, ApiError, ListQuery};

impl ApiClient {
    pub async fn list_pages(&self, query: &ListQuery) -> Result<ListResponse<PageRecord>, ApiError> {
        self.get("v1/pages", &query.pairs()).await
    }

    pub async fn get_page(&self, id: Uuid) -> Result<PageRecord, ApiError> {
        self.get(&format!("v1/pages/{id}"), &[]).await
    }

    pub async fn create_page(&self, page: &PageRequest) -> Result<PageRecord, ApiError> {
        let created: PageRecord = self.send_json(Method::POST, "v1/pages", page).await?;
        info!(id = %created.id, slug = %created.slug, "created page");
        Ok(created)
    }

    pub async fn update_page(&self, id: Uuid, page: &PageRequest) -> Result<PageRecord, ApiError> {
        self.send_json(Method::PUT, &format!("v1/pages/{id}"), page)
            .await
    }

    pub async fn delete_page(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("v1/pages/{id}"))
            .await?;
        info!(%id, "deleted page");
        Ok(())
    }

    pub async fn list_posts(
        &self,
        status: Option<PostStatus>,
    ) -> Result<ListResponse<PostRecord>, ApiError> {
        let query = status.map(|s| ListQuery::with_status(s.as_str())).unwrap_or_default();
        self.get("v1/posts", &query.pairs()).await
    }

    pub async fn get_post(&self, id: Uuid) -> Result<PostRecord, ApiError> {
        self.get(&format!("v1/posts/{id}"), &[]).await
    }

    pub async fn create_post(&self, post: &PostRequest) -> Result<PostRecord, ApiError> {
        let created: PostRecord = self.send_json(Method::POST, "v1/posts", post).await?;
        info!(id = %created.id, slug = %created.slug, "created post");
        Ok(created)
    }

    pub async fn update_post(&self, id: Uuid, post: &PostRequest) -> Result<PostRecord, ApiError> {
        self.send_json(Method::PUT, &format!("v1/posts/{id}"), post)
            .await
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("v1/posts/{id}"))
            .await?;
        info!(%id, "deleted post");
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<ListResponse<CategoryRecord>, ApiError> {
        self.get("v1/categories", &[]).await
    }

    pub async fn get_category(&self, id: Uuid) -> Result<CategoryRecord, ApiError> {
        self.get(&format!("v1/categories/{id}"), &[]).await
    }

    pub async fn create_category(
        &self,
        category: &CategoryRequest,
    ) -> Result<CategoryRecord, ApiError> {
        self.send_json(Method::POST, "v1/categories", category)
            .await
    }

    pub async fn update_category(
        &self,
        id: Uuid,
        category: &CategoryRequest,
    ) -> Result<CategoryRecord, ApiError> {
        self.send_json(Method::PUT, &format!("v1/categories/{id}"), category)
            .await
    }

    pub async fn delete_category(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("v1/categories/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use pagewright_api_types::PageStatus;

    use super::*;
    use crate::application::forms::PageForm;
    use crate::domain::blocks::{BlockContent, BlockType};

    const PAGE_ID: &str = "9b2d8c4e-0f6a-4d8e-b1a3-5c7e9f0a2b4d";

    fn page_body(blocks: &str) -> String {
        format!(
            r#"{{"id":"{PAGE_ID}","tenant_id":"default","slug":"home","title":"Home","blocks":{blocks},"status":"draft","created_at":"2026-01-05T10:00:00Z","updated_at":"2026-01-05T10:00:00Z"}}"#
        )
    }

    #[tokio::test]
    async fn list_pages_forwards_filters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/v1/pages")
                .query_param("status", "published")
                .query_param("limit", "5");
            then.status(200)
                .header("content-type", "application/json")
                .body(format!(r#"{{"data":[{}],"total":1,"limit":5,"offset":0}}"#, page_body("[]")));
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let query = ListQuery {
            limit: Some(5),
            status: Some(PageStatus::Published.as_str().into()),
            ..ListQuery::default()
        };
        let pages = client.list_pages(&query).await.expect("pages");
        mock.assert();
        assert_eq!(pages.total, 1);
        assert_eq!(pages.data[0].slug, "home");
    }

    #[tokio::test]
    async fn fetched_page_round_trips_through_the_editor() {
        let server = MockServer::start();
        let stored = r##"[{"id":"b1","type":"hero","data":{"title":"Hi","subtitle":"","background":"#fff"}},{"id":"b2","type":"carousel","data":{"slides":[1,2]}}]"##;
        server.mock(|when, then| {
            when.method("GET").path(format!("/api/v1/pages/{PAGE_ID}"));
            then.status(200)
                .header("content-type", "application/json")
                .body(page_body(stored));
        });
        let update = server.mock(|when, then| {
            when.method("PUT")
                .path(format!("/api/v1/pages/{PAGE_ID}"))
                .body_includes(r##""background":"#fff""##)
                .body_includes(r#"{"id":"b2","type":"carousel","data":{"slides":[1,2]}}"#)
                .body_includes(r#""type":"text""#);
            then.status(200)
                .header("content-type", "application/json")
                .body(page_body("[]"));
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let id: Uuid = PAGE_ID.parse().expect("uuid");
        let page = client.get_page(id).await.expect("page");
        let mut form = PageForm::from_page(&page).expect("form");
        assert!(matches!(form.blocks.blocks()[1].content, BlockContent::Unknown { .. }));

        form.blocks.add(BlockType::Text);
        let payload = form.to_payload().expect("payload");
        client.update_page(id, &payload).await.expect("saved");
        update.assert();
    }

    #[tokio::test]
    async fn list_posts_without_status_sends_no_query() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/api/v1/posts");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"data":[],"total":0}"#);
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let posts = client.list_posts(None).await.expect("posts");
        mock.assert();
        assert!(posts.data.is_empty());
    }
}
