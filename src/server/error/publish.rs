use thiserror::Error;

/// Failure to deliver a notification to the destination channel.
///
/// Always terminal for the request that triggered it: nothing is persisted and
/// the client receives a 500 with the failure details.
#[derive(Error, Debug)]
pub enum PublishError {
    /// The configured channel could not be fetched (wrong ID, bot not in the
    /// guild, or missing permissions).
    #[error("Channel {channel_id} not found or not accessible: {reason}")]
    ChannelUnavailable { channel_id: u64, reason: String },

    /// An embed color could not be parsed as `#RRGGBB`.
    #[error("Invalid embed color '{0}', expected a hex value like #5865F2")]
    InvalidColor(String),

    /// Discord rejected the message or the request did not complete.
    #[error("Discord rejected the message: {0}")]
    SendFailed(String),
}
