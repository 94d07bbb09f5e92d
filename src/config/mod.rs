//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use clap::{Args, ValueHint, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "pagewright";
const ENV_PREFIX: &str = "PAGEWRIGHT";
const DEFAULT_API_URL: &str = "http://localhost:3131";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Overrides shared by every binary; the highest-precedence layer.
#[derive(Debug, Args, Default, Clone)]
pub struct ConfigOverrides {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "PAGEWRIGHT_CONFIG_FILE",
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        global = true
    )]
    pub config_file: Option<PathBuf>,

    /// Override the content API site URL, e.g. <https://cms.example.com>.
    #[arg(long = "api-url", env = "PAGEWRIGHT_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Override the per-request timeout.
    #[arg(long = "api-timeout-seconds", value_name = "SECONDS", global = true)]
    pub api_timeout_seconds: Option<u64>,

    /// Override the site URL the theme client reads public data from.
    #[arg(long = "theme-api-url", value_name = "URL", global = true)]
    pub theme_api_url: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub theme: ThemeSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct ThemeSettings {
    pub api_url: Url,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(overrides: &ConfigOverrides) -> Result<Settings, LoadError> {
    let mut raw = load_raw(overrides.config_file.as_deref())?;
    raw.apply_overrides(overrides);
    Settings::from_raw(raw)
}

fn load_raw(config_file: Option<&Path>) -> Result<RawSettings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    Ok(builder.build()?.try_deserialize()?)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    theme: RawThemeSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawThemeSettings {
    api_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = overrides.api_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(seconds) = overrides.api_timeout_seconds {
            self.api.timeout_seconds = Some(seconds);
        }
        if let Some(url) = overrides.theme_api_url.as_ref() {
            self.theme.api_url = Some(url.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            theme,
            logging,
        } = raw;

        let api = build_api_settings(api)?;
        let theme = build_theme_settings(theme, &api)?;
        let logging = build_logging_settings(logging)?;

        Ok(Self {
            api,
            theme,
            logging,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let base_url = parse_site_url(
        "api.base_url",
        api.base_url.as_deref().unwrap_or(DEFAULT_API_URL),
    )?;

    // Zero disables the timeout.
    let seconds = api.timeout_seconds.unwrap_or(DEFAULT_API_TIMEOUT_SECS);
    let timeout = (seconds > 0).then(|| Duration::from_secs(seconds));

    Ok(ApiSettings { base_url, timeout })
}

fn build_theme_settings(
    theme: RawThemeSettings,
    api: &ApiSettings,
) -> Result<ThemeSettings, LoadError> {
    let api_url = match theme.api_url.as_deref() {
        Some(url) => parse_site_url("theme.api_url", url)?,
        None => api.base_url.clone(),
    };
    Ok(ThemeSettings { api_url })
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::WARN,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

fn parse_site_url(key: &'static str, value: &str) -> Result<Url, LoadError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LoadError::invalid(key, "must not be empty"));
    }
    let url = Url::parse(trimmed)
        .map_err(|err| LoadError::invalid(key, format!("invalid URL `{trimmed}`: {err}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            key,
            format!("unsupported scheme `{}`", url.scheme()),
        ));
    }
    Ok(url)
}
