//! Discord bot connection.
//!
//! The bot only posts into a single configured channel; it does not react to
//! guild events. The gateway connection runs in its own tokio task and exists to
//! report readiness. Its HTTP client is shared with the channel publisher.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Channel lookups
//! - `GUILD_MESSAGES` - Posting into the destination channel

pub mod handler;
pub mod start;
