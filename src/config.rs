//! Application Configuration
//!
//! Values are baked in at compile time from the environment (or `.env`, see `build.rs`).

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, empty for same-origin requests
    pub api_base_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    /// Delay before success/info notices disappear
    pub notice_timeout_ms: u32,
    /// Query sent when the chat widget is opened for the first time
    pub chat_intro_query: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            notice_timeout_ms: 4000,
            chat_intro_query: "Introduce yourself".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            notice_timeout_ms: option_env!("NOTICE_TIMEOUT_MS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.notice_timeout_ms),
            chat_intro_query: option_env!("CHAT_INTRO_QUERY")
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.chat_intro_query),
        }
    }

    /// Console log level, falling back to `info` on unknown values
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);

        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_default_is_same_origin_development() {
        let config = AppConfig::default();
        assert!(config.api_base_url.is_empty());
        assert_eq!(config.environment, "development");
        assert_eq!(config.chat_intro_query, "Introduce yourself");
    }
}
