use async_trait::async_trait;
use pagewright_api_types::{
    LoginRequest, LoginResponse, MeResponse, ProfileUpdateRequest, SessionUser,
};
use reqwest::{Method, StatusCode};
use tracing::info;

use super::{ApiClient, ApiError, OnUnauthorized, decode};
use crate::application::error::BoxError;
use crate::application::session::AuthBackend;

impl ApiClient {
    /// Rejected credentials come back as `success: false` with the server's
    /// message rather than as an error.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let builder = self.request(Method::POST, "auth/login")?.json(request);
        match self.execute(builder, OnUnauthorized::Ignore).await {
            Ok(response) => decode(response).await,
            Err(ApiError::Server { status, message })
                if status == StatusCode::UNAUTHORIZED.as_u16()
                    || status == StatusCode::BAD_REQUEST.as_u16() =>
            {
                info!(status, "login rejected");
                Ok(LoginResponse {
                    success: false,
                    message,
                    user: None,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// `None` when there is no session cookie or it is no longer valid.
    pub async fn me(&self) -> Result<Option<SessionUser>, ApiError> {
        let builder = self.request(Method::GET, "auth/me")?;
        match self.execute(builder, OnUnauthorized::Ignore).await {
            Ok(response) => {
                let body: MeResponse = decode(response).await?;
                Ok(body.user.filter(|_| body.success))
            }
            Err(ApiError::Server { status, .. }) if status == StatusCode::UNAUTHORIZED.as_u16() => {
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn update_profile(&self, update: &ProfileUpdateRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::PUT, "auth/profile")?.json(update);
        self.execute(builder, OnUnauthorized::Expire).await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "auth/logout")?;
        let response = self.execute(builder, OnUnauthorized::Ignore).await;
        match response {
            Ok(_) => Ok(()),
            // An expired cookie is already logged out.
            Err(ApiError::Server { status, .. }) if status == StatusCode::UNAUTHORIZED.as_u16() => {
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl AuthBackend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BoxError> {
        Ok(ApiClient::login(self, request).await?)
    }

    async fn me(&self) -> Result<Option<SessionUser>, BoxError> {
        Ok(ApiClient::me(self).await?)
    }

    async fn logout(&self) -> Result<(), BoxError> {
        Ok(ApiClient::logout(self).await?)
    }
}
