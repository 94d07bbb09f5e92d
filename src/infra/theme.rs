//! Read-only client for the public site: settings and menus with fallbacks.
//!
//! A rendering theme must never fail because the API is down, so every
//! call logs the failure and returns an empty default instead.

use pagewright_api_types::{GlobalSettings, MenuItem};
use serde::Serialize;
use tracing::error;

use super::http::{ApiClient, ApiError};
use crate::config::ThemeSettings;

pub const FALLBACK_SITE_NAME: &str = "Pagewright";

/// Everything a theme layout needs around the page body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteChrome {
    pub settings: GlobalSettings,
    pub header: Vec<MenuItem>,
    pub footer: Vec<MenuItem>,
}

#[derive(Debug, Clone)]
pub struct ThemeClient {
    api: ApiClient,
}

impl ThemeClient {
    pub fn new(site: &str) -> Result<Self, ApiError> {
        Ok(Self {
            api: ApiClient::new(site)?,
        })
    }

    pub fn from_settings(settings: &ThemeSettings) -> Result<Self, ApiError> {
        Self::new(settings.api_url.as_str())
    }

    pub async fn settings(&self) -> GlobalSettings {
        match self.api.get_settings().await {
            Ok(settings) => settings,
            Err(err) => {
                error!(error = %err, "failed to fetch global settings");
                fallback_settings()
            }
        }
    }

    pub async fn menu(&self, id: &str) -> Vec<MenuItem> {
        match self.api.get_public_menu(id).await {
            Ok(menu) => menu.items,
            Err(err) => {
                error!(menu = id, error = %err, "failed to fetch menu");
                Vec::new()
            }
        }
    }

    /// Settings plus the header and footer menus they point at.
    pub async fn chrome(&self) -> SiteChrome {
        let settings = self.settings().await;
        let header = match settings.header_menu_id.as_deref() {
            Some(id) => self.menu(id).await,
            None => Vec::new(),
        };
        let footer = match settings.footer_menu_id.as_deref() {
            Some(id) => self.menu(id).await,
            None => Vec::new(),
        };
        SiteChrome {
            settings,
            header,
            footer,
        }
    }
}

fn fallback_settings() -> GlobalSettings {
    GlobalSettings {
        site_name: FALLBACK_SITE_NAME.to_string(),
        ..GlobalSettings::default()
    }
}
