use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://payouts.db?mode=rwc";
const DEFAULT_BRAND_NAME: &str = "Payout Bot";

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    pub discord_channel_id: u64,

    /// Plain text, bcrypt or argon2 PHC string.
    pub admin_password: String,

    pub brand_name: String,
    pub brand_icon_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let channel_id = required("DISCORD_CHANNEL_ID")?;
        let discord_channel_id = channel_id
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "DISCORD_CHANNEL_ID".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: optional("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_channel_id,
            admin_password: required("ADMIN_PASSWORD")?,
            brand_name: optional("BOT_BRAND_NAME")
                .unwrap_or_else(|| DEFAULT_BRAND_NAME.to_string()),
            brand_icon_url: optional("BOT_BRAND_ICON_URL"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and empty variables are treated the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
