//! Who is signed in to the admin.
//!
//! The backend owns the session cookie; this only mirrors what `/auth/me`
//! reports and reacts to the expiry signal raised by the HTTP client on 401.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use pagewright_api_types::{LoginRequest, LoginResponse, SessionUser};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::application::error::BoxError;

const LOGIN_FAILED: &str = "Login failed";

#[async_trait]
pub trait AuthBackend: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, BoxError>;

    /// The current user, or `None` when the backend reports no session.
    async fn me(&self) -> Result<Option<SessionUser>, BoxError>;

    async fn logout(&self) -> Result<(), BoxError>;
}

/// Notified when the backend rejects a request as unauthenticated.
pub trait SessionExpiredHandler: Send + Sync {
    fn session_expired(&self);
}

/// Flag shared between the HTTP client and a [`Session`].
#[derive(Debug, Clone, Default)]
pub struct ExpirySignal(Arc<AtomicBool>);

impl ExpirySignal {
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether the signal was raised since the last call.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

impl SessionExpiredHandler for ExpirySignal {
    fn session_expired(&self) {
        self.raise();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated(SessionUser),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("login required")]
    LoginRequired,
    #[error("session is still loading")]
    Loading,
    #[error("{0}")]
    LoginRejected(String),
    #[error("authentication backend failed: {0}")]
    Backend(#[source] BoxError),
}

pub struct Session<B> {
    backend: B,
    state: SessionState,
    expiry: ExpirySignal,
}

impl<B: AuthBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self::with_expiry(backend, ExpirySignal::default())
    }

    /// Share `expiry` with the client that talks to `backend`.
    pub fn with_expiry(backend: B, expiry: ExpirySignal) -> Self {
        Self {
            backend,
            state: SessionState::Loading,
            expiry,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle to give the HTTP client so a 401 ends this session.
    pub fn expiry_signal(&self) -> ExpirySignal {
        self.expiry.clone()
    }

    /// Ask the backend who is signed in. Any failure means anonymous.
    pub async fn bootstrap(&mut self) -> &SessionState {
        self.state = match self.backend.me().await {
            Ok(Some(user)) => SessionState::Authenticated(user),
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                debug!(error = %err, "no active session");
                SessionState::Anonymous
            }
        };
        self.expiry.take();
        &self.state
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<&SessionUser, SessionError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .backend
            .login(&request)
            .await
            .map_err(SessionError::Backend)?;
        if !response.success {
            let message = if response.message.is_empty() {
                LOGIN_FAILED.to_string()
            } else {
                response.message
            };
            return Err(SessionError::LoginRejected(message));
        }

        let user = self
            .backend
            .me()
            .await
            .map_err(SessionError::Backend)?
            .ok_or_else(|| SessionError::LoginRejected(LOGIN_FAILED.to_string()))?;
        info!(user = %user.email, "signed in");
        self.expiry.take();
        self.state = SessionState::Authenticated(user);
        self.require_auth()
    }

    /// Drop the local session even when the backend call fails.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::Anonymous;
        self.backend.logout().await.map_err(SessionError::Backend)
    }

    pub fn expire(&mut self) {
        if matches!(self.state, SessionState::Authenticated(_)) {
            warn!("session expired");
        }
        self.state = SessionState::Anonymous;
    }

    /// The signed-in user, after applying any pending expiry signal.
    pub fn current_user(&mut self) -> Result<&SessionUser, SessionError> {
        if self.expiry.take() {
            self.expire();
        }
        self.require_auth()
    }

    pub fn require_auth(&self) -> Result<&SessionUser, SessionError> {
        match &self.state {
            SessionState::Authenticated(user) => Ok(user),
            SessionState::Loading => Err(SessionError::Loading),
            SessionState::Anonymous => Err(SessionError::LoginRequired),
        }
    }
}
