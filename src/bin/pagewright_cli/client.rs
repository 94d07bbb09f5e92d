#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pagewright::application::editor::{EditError, ImageError};
use pagewright::application::forms::FormError;
use pagewright::application::session::{ExpirySignal, Session, SessionError};
use pagewright::config::{ApiSettings, LoadError};
use pagewright::infra::telemetry::TelemetryError;
use pagewright::infra::http::{ApiClient, ApiError};
use pagewright::presentation::views::TemplateRenderError;
use pagewright_api_types::SessionUser;
use thiserror::Error;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("email is required (use --email or PAGEWRIGHT_EMAIL)")]
    MissingEmail,
    #[error("password is required (use --password-file or PAGEWRIGHT_PASSWORD)")]
    MissingPassword,
    #[error("failed to read password file: {0}")]
    PasswordFile(#[source] std::io::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    OutputFile {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Email from flag or env; password from file first, then env.
pub fn credentials_from_cli(cli: &Cli) -> Result<Credentials, CliError> {
    let email = cli
        .email
        .clone()
        .filter(|email| !email.trim().is_empty())
        .ok_or(CliError::MissingEmail)?;
    let password = if let Some(path) = &cli.password_file {
        read_secret(path)?
    } else {
        cli.password_env.clone().ok_or(CliError::MissingPassword)?
    };
    if password.is_empty() {
        return Err(CliError::MissingPassword);
    }
    Ok(Credentials { email, password })
}

fn read_secret(path: &Path) -> Result<String, CliError> {
    let raw = fs::read_to_string(path).map_err(CliError::PasswordFile)?;
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

/// A signed-in API client.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub api: ApiClient,
    pub user: SessionUser,
    expiry: ExpirySignal,
}

impl Ctx {
    pub async fn sign_in(settings: &ApiSettings, credentials: &Credentials) -> Result<Self, CliError> {
        Self::sign_in_with(ApiClient::from_settings(settings)?, credentials).await
    }

    /// Log in through `api`; clones share its cookie jar.
    pub async fn sign_in_with(api: ApiClient, credentials: &Credentials) -> Result<Self, CliError> {
        let expiry = ExpirySignal::default();
        let api = api.with_session_expired_handler(Arc::new(expiry.clone()));
        let mut session = Session::with_expiry(api.clone(), expiry.clone());
        let user = session
            .login(&credentials.email, &credentials.password)
            .await?
            .clone();
        Ok(Self { api, user, expiry })
    }

    /// Whether a request was rejected as unauthenticated since the last check.
    pub fn session_expired(&self) -> bool {
        self.expiry.take()
    }
}
