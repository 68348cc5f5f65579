/*
 * Responsibility
 * - 環境変数 (.env 含む) から client の設定を読み込む
 * - base URL のバリデーション (不正なら起動失敗)
 * - 起動後は immutable。ApiClient に注入して使う
 */
use std::fmt;

use url::Url;

/// Backend origin used when neither `SOCIAL_API_URL` nor `--base-url` is given.
pub const DEFAULT_API_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()))
    }

    fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub app_env: AppEnv,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw = std::env::var("SOCIAL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let base_url = parse_base_url(&raw).map_err(|_| ConfigError::Invalid("SOCIAL_API_URL"))?;

        Ok(Self {
            base_url,
            app_env: AppEnv::from_env(),
        })
    }

    /// Config pointing at an explicit origin, used by tests and the `--base-url` flag.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let base_url = parse_base_url(raw).map_err(|_| ConfigError::Invalid("base_url"))?;
        Ok(Self {
            base_url,
            app_env: AppEnv::Development,
        })
    }

    pub fn override_base_url(mut self, raw: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = raw {
            self.base_url = parse_base_url(raw).map_err(|_| ConfigError::Invalid("--base-url"))?;
        }
        Ok(self)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ()> {
    let url = Url::parse(raw.trim()).map_err(|_| ())?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = Config::with_base_url(DEFAULT_API_URL).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8001/");
        assert!(!config.app_env.is_production());
    }

    #[test]
    fn rejects_non_http_origins() {
        assert_eq!(
            Config::with_base_url("ftp://example.com").unwrap_err(),
            ConfigError::Invalid("base_url")
        );
        assert!(Config::with_base_url("not a url").is_err());
    }

    #[test]
    fn override_keeps_env_when_flag_absent() {
        let base = Config::with_base_url(DEFAULT_API_URL).unwrap();
        let config = base.clone().override_base_url(None).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8001/");

        let config = base
            .override_base_url(Some("http://127.0.0.1:9000"))
            .unwrap();
        assert_eq!(config.base_url.port(), Some(9000));
    }

    #[test]
    fn app_env_accepts_short_form() {
        assert_eq!(AppEnv::parse("PROD"), AppEnv::Production);
        assert_eq!(AppEnv::parse("staging"), AppEnv::Development);
    }
}
