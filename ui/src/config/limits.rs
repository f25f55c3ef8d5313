/// Bounds for the HTTP request timeout (seconds)
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Longest dedup window accepted for the session cache (10 minutes)
pub const MAX_DEDUP_WINDOW_MS: u64 = 600_000;

/// Retry limits for session fetches
pub const MAX_SESSION_RETRIES: u32 = 5;
pub const MAX_RETRY_DELAY_MS: u64 = 30_000;
