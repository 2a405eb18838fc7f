mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;
        use std::sync::{atomic::AtomicBool, Arc};
        use tower_http::trace::TraceLayer;

        use crate::server::{
            bot,
            config::Config,
            service::notification::{builder::Branding, posting::DiscordChannelPublisher},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::session_layer();

        tracing::info!("Starting server");

        // Initialize Discord bot and extract HTTP client
        let ready = Arc::new(AtomicBool::new(false));
        let (bot_client, discord_http) = bot::start::init_bot(&config, ready.clone()).await?;

        // Start Discord bot in a separate task
        tokio::spawn(async move {
            if let Err(e) = bot::start::start_bot(bot_client).await {
                tracing::error!("Discord bot error: {}", e);
            }
        });

        let publisher = Arc::new(DiscordChannelPublisher::new(
            discord_http,
            config.discord_channel_id,
            ready,
        ));
        let branding = Branding::new(config.brand_name.clone(), config.brand_icon_url.clone());

        tracing::info!(
            "Admin panel available at http://{}",
            dioxus_cli_config::fullstack_address_or_localhost()
        );

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(
                db,
                publisher,
                branding,
                config.admin_password.clone(),
            ))
            .layer(session)
            .layer(TraceLayer::new_for_http());
        router = router.merge(server_routes);

        Ok(router)
    })
}
