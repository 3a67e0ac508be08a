use anyhow::{Context, Result};

use crate::improvement::TemplateVariant;
use crate::llm_client::{GatewayConfig, DEFAULT_API_BASE, DEFAULT_MODEL};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    /// `None` leaves the HTTP client without a timeout.
    pub llm_timeout_secs: Option<u64>,
    pub llm_max_retries: u32,
    pub template_variant: TemplateVariant,
    /// `None` disables the request body limit entirely.
    pub max_upload_bytes: Option<usize>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: require_env("GOOGLE_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            gemini_api_base: std::env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            llm_timeout_secs: match optional_parsed::<u64>("LLM_TIMEOUT_SECS")? {
                Some(0) => None,
                Some(secs) => Some(secs),
                None => Some(120),
            },
            llm_max_retries: optional_parsed("LLM_MAX_RETRIES")?.unwrap_or(0),
            template_variant: optional_parsed("TEMPLATE_VARIANT")?.unwrap_or_default(),
            max_upload_bytes: optional_parsed("MAX_UPLOAD_BYTES")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// The slice of configuration the completion gateway is built from.
    pub fn gateway(&self) -> GatewayConfig {
        GatewayConfig {
            api_key: self.google_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_api_base.clone(),
            timeout_secs: self.llm_timeout_secs,
            max_retries: self.llm_max_retries,
        }
    }

    /// Completion timeout for log lines, e.g. `120s` or `none`.
    pub fn timeout_label(&self) -> String {
        self.llm_timeout_secs
            .map_or_else(|| "none".to_string(), |secs| format!("{secs}s"))
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_parsed<T>(key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Environment variable '{key}' is invalid: {e}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            google_api_key: "test-key".to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: "http://127.0.0.1:1".to_string(),
            llm_timeout_secs: Some(5),
            llm_max_retries: 0,
            template_variant: TemplateVariant::default(),
            max_upload_bytes: None,
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_carries_credentials_and_policy() {
        let config = Config {
            llm_max_retries: 2,
            ..Config::for_tests()
        };
        let gateway = config.gateway();
        assert_eq!(gateway.api_key, "test-key");
        assert_eq!(gateway.model, DEFAULT_MODEL);
        assert_eq!(gateway.max_retries, 2);
        assert_eq!(gateway.timeout_secs, Some(5));
    }

    #[test]
    fn test_optional_parsed_missing_is_none() {
        let value: Option<u32> = optional_parsed("IMPROVER_TEST_SURELY_UNSET_VARIABLE").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_timeout_label() {
        assert_eq!(Config::for_tests().timeout_label(), "5s");
        let unlimited = Config {
            llm_timeout_secs: None,
            ..Config::for_tests()
        };
        assert_eq!(unlimited.timeout_label(), "none");
    }
}
