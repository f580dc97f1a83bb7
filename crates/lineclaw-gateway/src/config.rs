use anyhow::{bail, Result};
use lineclaw_channel::MAX_MESSAGES_PER_REQUEST;
use lineclaw_logging::LogFormat;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "info"  # trace, debug, info, warn, error
format = "text"  # or "json"

[reply]
max_messages = 5  # 1 to 5 messages per reply
echo_prefix = ""
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplyConfig {
    pub max_messages: usize,
    pub echo_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub reply: ReplyConfig,
}

impl Config {
    /// Global config path: ~/.lineclaw/lineclaw.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".lineclaw").join("lineclaw.toml"))
    }

    fn defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder().add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.lineclaw/lineclaw.toml (optional)
    /// 3. Local override: ./lineclaw.toml (optional)
    /// 4. Environment variables with LINECLAW__ prefix
    /// 5. LINECLAW_LOG_LEVEL convenience override (highest priority)
    pub fn load() -> Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = Self::defaults();

        if let Some(global_config_path) = Self::global_config_path() {
            config_builder =
                config_builder.add_source(config::File::from(global_config_path).required(false));
        }

        config_builder = config_builder
            .add_source(config::File::with_name("lineclaw").required(false))
            .add_source(config::Environment::with_prefix("LINECLAW").separator("__"));

        if let Ok(level) = env::var("LINECLAW_LOG_LEVEL") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        let config: Self = config_builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with a TOML document
    pub fn from_toml(overrides: &str) -> Result<Self> {
        let config: Self = Self::defaults()
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_MESSAGES_PER_REQUEST).contains(&self.reply.max_messages) {
            bail!(
                "reply.max_messages must be between 1 and {}, got {}",
                MAX_MESSAGES_PER_REQUEST,
                self.reply.max_messages
            );
        }
        Ok(())
    }
}
