use std::time::Duration;
use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

/// How long the mock waitlist signup pretends to wait on the network.
pub fn get_signup_delay() -> Duration {
    Duration::from_millis(1000)
}

/// How long a toast stays on screen before it dismisses itself.
pub fn get_toast_duration_ms() -> u32 {
    5000
}
