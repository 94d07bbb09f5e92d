use pagewright_api_types::{
    DashboardResponse, DashboardStats, GlobalSettings, ListResponse, MenuRecord, MenuRequest,
    UserRecord, UserRequest,
};
use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use super::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_menus(&self) -> Result<ListResponse<MenuRecord>, ApiError> {
        self.get("v1/menus", &[]).await
    }

    pub async fn get_menu(&self, id: Uuid) -> Result<MenuRecord, ApiError> {
        self.get(&format!("v1/menus/{id}"), &[]).await
    }

    /// Menu as served to the public site, no session required.
    pub async fn get_public_menu(&self, id: &str) -> Result<MenuRecord, ApiError> {
        self.get(&format!("public/menus/{id}"), &[]).await
    }

    pub async fn create_menu(&self, menu: &MenuRequest) -> Result<MenuRecord, ApiError> {
        self.send_json(Method::POST, "v1/menus", menu).await
    }

    pub async fn update_menu(&self, id: Uuid, menu: &MenuRequest) -> Result<MenuRecord, ApiError> {
        self.send_json(Method::PUT, &format!("v1/menus/{id}"), menu)
            .await
    }

    pub async fn delete_menu(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("v1/menus/{id}"))
            .await
    }

    pub async fn list_users(&self) -> Result<ListResponse<UserRecord>, ApiError> {
        self.get("v1/users", &[]).await
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserRecord, ApiError> {
        self.get(&format!("v1/users/{id}"), &[]).await
    }

    pub async fn create_user(&self, user: &UserRequest) -> Result<UserRecord, ApiError> {
        let created: UserRecord = self.send_json(Method::POST, "v1/users", user).await?;
        info!(id = %created.id, email = %created.email, "created user");
        Ok(created)
    }

    pub async fn update_user(&self, id: Uuid, user: &UserRequest) -> Result<UserRecord, ApiError> {
        self.send_json(Method::PUT, &format!("v1/users/{id}"), user)
            .await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("v1/users/{id}"))
            .await
    }

    /// Settings are read from the public endpoint and written through the admin one.
    pub async fn get_settings(&self) -> Result<GlobalSettings, ApiError> {
        self.get("public/settings", &[]).await
    }

    pub async fn update_settings(
        &self,
        settings: &GlobalSettings,
    ) -> Result<GlobalSettings, ApiError> {
        let saved: GlobalSettings = self
            .send_json(Method::PUT, "v1/settings", settings)
            .await?;
        info!(site_name = %saved.site_name, "updated site settings");
        Ok(saved)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let response: DashboardResponse = self.get("v1/dashboard/stats", &[]).await?;
        Ok(response.stats)
    }
}
