pub const SITE_NAME: &str = "Payout Board";

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u32 = 5_000;

/// Rows requested by the dashboard history panels.
pub const HISTORY_PAGE_SIZE: u64 = 50;
