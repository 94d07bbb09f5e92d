use async_trait::async_trait;
use bytes::Bytes;
use pagewright_api_types::{ListResponse, MediaItem, UploadFromUrlRequest, UploadResponse};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tracing::info;

use super::{ApiClient, ApiError, OnUnauthorized, decode};
use crate::application::editor::ImageSource;
use crate::application::error::BoxError;

impl ApiClient {
    pub async fn list_media(&self) -> Result<ListResponse<MediaItem>, ApiError> {
        self.get("v1/media", &[]).await
    }

    pub async fn get_media(&self, name: &str) -> Result<MediaItem, ApiError> {
        self.get(&format!("v1/media/{name}"), &[]).await
    }

    /// Store a file and return its public URL.
    pub async fn upload(&self, file_name: &str, bytes: Bytes) -> Result<String, ApiError> {
        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        let size = bytes.len();
        let part = Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime.essence_str())?;
        let form = Form::new().part("file", part);

        let request = self.request(Method::POST, "v1/upload")?.multipart(form);
        let response = self.execute(request, OnUnauthorized::Expire).await?;
        let body: UploadResponse = decode(response).await?;
        info!(file_name, size, url = %body.url, "uploaded file");
        Ok(body.url)
    }

    /// Have the server download `url` into storage and return the stored URL.
    pub async fn upload_from_url(&self, url: &str) -> Result<String, ApiError> {
        let request = UploadFromUrlRequest {
            url: url.to_string(),
        };
        let body: UploadResponse = self
            .send_json(Method::POST, "v1/upload/from-url", &request)
            .await?;
        info!(source = url, url = %body.url, "stored remote file");
        Ok(body.url)
    }
}

#[async_trait]
impl ImageSource for ApiClient {
    async fn upload(&self, file_name: &str, bytes: Bytes) -> Result<String, BoxError> {
        Ok(ApiClient::upload(self, file_name, bytes).await?)
    }

    async fn fetch_from_url(&self, url: &str) -> Result<String, BoxError> {
        Ok(self.upload_from_url(url).await?)
    }
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;

    use super::*;
    use crate::application::editor::{BlockEditor, ImageInput, attach_image};
    use crate::domain::blocks::{BlockContent, BlockType};

    #[tokio::test]
    async fn upload_posts_a_multipart_file_field() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/v1/upload")
                .body_includes(r#"name="file"; filename="logo.png""#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"url":"/uploads/2026/logo.png"}"#);
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let url = client
            .upload("logo.png", Bytes::from_static(b"\x89PNG"))
            .await
            .expect("upload");
        mock.assert();
        assert_eq!(url, "/uploads/2026/logo.png");
    }

    #[tokio::test]
    async fn image_block_is_filled_from_a_remote_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST")
                .path("/api/v1/upload/from-url")
                .json_body(serde_json::json!({"url":"https://cdn.example/cat.jpg"}));
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"url":"/uploads/cat.jpg"}"#);
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let mut editor = BlockEditor::new(Vec::new());
        editor.add(BlockType::Image);
        attach_image(
            &mut editor,
            0,
            "url",
            ImageInput::Url("https://cdn.example/cat.jpg".into()),
            &client,
        )
        .await
        .expect("attached");

        match &editor.blocks()[0].content {
            BlockContent::Image(data) => assert_eq!(data.url, "/uploads/cat.jpg"),
            other => panic!("expected image, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_remote_fetch_reports_the_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/api/v1/upload/from-url");
            then.status(400)
                .header("content-type", "application/json")
                .body(r#"{"error":"unsupported content type","code":400}"#);
        });

        let client = ApiClient::new(&server.base_url()).expect("client");
        let err = client
            .upload_from_url("https://cdn.example/notes.txt")
            .await
            .expect_err("rejected");
        assert_eq!(err.to_string(), "server returned 400: unsupported content type");
    }
}
