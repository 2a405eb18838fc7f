use serenity::all::{Context, EventHandler, Ready, ResumedEvent};
use serenity::async_trait;
use std::sync::{atomic::AtomicBool, Arc};

pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Shared with the channel publisher, reported by `/health` and `/api/auth-status`.
    pub ready: Arc<AtomicBool>,
}

impl Handler {
    pub fn new(ready: Arc<AtomicBool>) -> Self {
        Self { ready }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.ready, ctx, ready).await;
    }

    /// Called when a dropped gateway session is resumed
    async fn resume(&self, ctx: Context, event: ResumedEvent) {
        ready::handle_resume(&self.ready, ctx, event).await;
    }
}
