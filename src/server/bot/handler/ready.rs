//! Ready and resume event handlers.
//!
//! Both events mean the gateway connection is usable, so both set the shared
//! readiness flag.

use dioxus_logger::tracing;
use serenity::all::{Context, Ready, ResumedEvent};
use std::sync::atomic::{AtomicBool, Ordering};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `flag` - Readiness flag shared with the channel publisher
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(flag: &AtomicBool, _ctx: Context, ready: Ready) {
    flag.store(true, Ordering::Relaxed);
    tracing::info!("{} is connected to Discord", ready.user.name);
}

pub async fn handle_resume(flag: &AtomicBool, _ctx: Context, _event: ResumedEvent) {
    flag.store(true, Ordering::Relaxed);
    tracing::info!("Discord gateway session resumed");
}
