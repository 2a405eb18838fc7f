use dioxus_logger::tracing;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};
use std::sync::{atomic::AtomicBool, Arc};

use crate::server::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client without connecting.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `ready` - Flag the event handler sets once the gateway is connected
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client to start and its shared HTTP handle
/// - `Err(AppError::DiscordErr)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    ready: Arc<AtomicBool>,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(ready))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway. Runs until the connection shuts down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
