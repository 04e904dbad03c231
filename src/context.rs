//! Application Context
//!
//! Shared, non-reactive settings provided via Leptos Context API.

use leptos::prelude::*;
use rolling_logger::LoggerHandle;

use crate::config::MotionConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Animation timings
    pub motion: MotionConfig,
}

impl AppContext {
    pub fn new(motion: MotionConfig) -> Self {
        Self { motion }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Recent log lines, empty when no logger was installed
pub fn recent_logs() -> Vec<String> {
    use_context::<LoggerHandle>()
        .map(|logger| logger.recent())
        .unwrap_or_default()
}
