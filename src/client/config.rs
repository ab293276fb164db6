use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_TIMEOUT_SECS: &str = "10";

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientConfigError {
    #[error("Invalid {0} value")]
    InvalidTimeout(String),

    #[error("FORUM_API_BASE_URL must start with http:// or https://")]
    InvalidBaseUrl,
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    fn parse_timeout(key: &str, default: &str) -> Result<Duration, ClientConfigError> {
        let secs = env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<u64>()
            .map_err(|_| ClientConfigError::InvalidTimeout(key.to_string()))?;

        if secs == 0 {
            return Err(ClientConfigError::InvalidTimeout(key.to_string()));
        }

        Ok(Duration::from_secs(secs))
    }

    /// Load client configuration from environment variables
    pub fn from_env() -> Result<Self, ClientConfigError> {
        let base_url = env::var("FORUM_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientConfigError::InvalidBaseUrl);
        }

        let timeout = Self::parse_timeout("FORUM_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self { base_url, timeout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_server() {
        let config = ClientConfig::default();

        assert_eq!(config.base_url, "http://localhost:4000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn parse_timeout_falls_back_to_default() {
        let timeout = ClientConfig::parse_timeout("FORUM_TEST_UNSET_TIMEOUT", "7").unwrap();
        assert_eq!(timeout, Duration::from_secs(7));
    }

    #[test]
    fn parse_timeout_rejects_zero_and_garbage() {
        env::set_var("FORUM_TEST_ZERO_TIMEOUT", "0");
        env::set_var("FORUM_TEST_WORD_TIMEOUT", "later");

        assert!(ClientConfig::parse_timeout("FORUM_TEST_ZERO_TIMEOUT", "10").is_err());
        assert!(matches!(
            ClientConfig::parse_timeout("FORUM_TEST_WORD_TIMEOUT", "10"),
            Err(ClientConfigError::InvalidTimeout(key)) if key == "FORUM_TEST_WORD_TIMEOUT"
        ));
    }
}
