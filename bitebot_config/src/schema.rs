use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use bitebot_core::{Markers, RetryPolicy};

pub const DEFAULT_GREETING: &str =
    "Hello! I'm your restaurant recommendation assistant. How can I help you today?";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub retry: RetryPolicy,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub extraction: Markers,
    #[serde(default = "Config::default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default = "WebhookConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    const fn default_timeout_secs() -> u64 {
        30
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "ChatConfig::default_greeting")]
    pub greeting: String,
    /// Messages shown by `history` in the interactive chat.
    #[serde(default = "ChatConfig::default_history_limit")]
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: Self::default_greeting(),
            history_limit: Self::default_history_limit(),
        }
    }
}

impl ChatConfig {
    fn default_greeting() -> String {
        DEFAULT_GREETING.to_string()
    }

    const fn default_history_limit() -> usize {
        50
    }
}

impl Config {
    fn default_log_level() -> String {
        "info".to_string()
    }

    /// Default location: `~/bitebot/config.json`.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("bitebot"))
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'bitebot init' to create config.",
                config_path.display()
            );
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = Self::parse(&content)?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Invalid config file: {e}"))?;
        if let Err(e) = config.extraction.validate() {
            anyhow::bail!("Invalid extraction markers: {e}");
        }
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, CONFIG_TEMPLATE)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Edit the config file and set webhook.url to your chat webhook");
        println!("   2. Run 'bitebot chat' to start a conversation");
        println!();
        println!("🔧 Configuration options:");
        println!("   - retry: backoff schedule for webhook requests (milliseconds)");
        println!("   - chat.greeting: first bot message of every session");
        println!("   - extraction: marker texts of the restaurant list format");
        println!();
        Ok(())
    }
}

const CONFIG_TEMPLATE: &str = r#"{
  "webhook": {
    "url": "https://your-webhook-host/chat",
    "timeout_secs": 30
  },
  "retry": {
    "base_delays_ms": [500, 1000, 2000],
    "final_retries": 1,
    "final_delay_ms": 5000
  },
  "chat": {
    "greeting": "Hello! I'm your restaurant recommendation assistant. How can I help you today?",
    "history_limit": 50
  },
  "log_level": "info"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_template_parses() {
        let config = Config::parse(CONFIG_TEMPLATE).expect("template should parse");

        assert_eq!(config.webhook.url, "https://your-webhook-host/chat");
        assert_eq!(config.webhook.timeout_secs, 30);
        assert_eq!(config.retry, RetryPolicy::default());
        assert_eq!(config.chat.greeting, DEFAULT_GREETING);
        assert_eq!(config.extraction, Markers::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse(r#"{ "webhook": { "url": "http://localhost/chat" } }"#)
            .expect("minimal config should parse");

        assert_eq!(config.webhook.timeout_secs, 30);
        assert_eq!(config.chat.history_limit, 50);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.extraction.sentinel,
            "**Here are some great restaurant options:**"
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_extraction_override() {
        let config = Config::parse(
            r#"{
                "webhook": { "url": "http://localhost/chat" },
                "extraction": { "sentinel": "Top picks:" },
                "retry": { "final_retries": 0 }
            }"#,
        )
        .expect("partial overrides should parse");

        assert_eq!(config.extraction.sentinel, "Top picks:");
        assert_eq!(config.extraction.rating_label, "Rating:");
        assert_eq!(config.retry.final_retries, 0);
        assert_eq!(config.retry.base_delays_ms, vec![500, 1000, 2000]);
    }

    #[test]
    fn test_missing_webhook_is_rejected() {
        assert!(Config::parse(r#"{ "chat": {} }"#).is_err());
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        for field in ["sentinel", "bold", "address_label", "rating_label", "price_label"] {
            let content = format!(
                r#"{{ "webhook": {{ "url": "http://localhost/chat" }}, "extraction": {{ "{field}": "" }} }}"#
            );
            let message = Config::parse(&content).err().map(|e| e.to_string());
            assert!(
                message.as_deref().is_some_and(|m| m.contains(field)),
                "empty {field} should be rejected, got {message:?}"
            );
        }
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("bitebot-config-does-not-exist.json");
        assert!(Config::load_from(&path).is_err());
    }
}
