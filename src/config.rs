use std::env;

use log::warn;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process-wide configuration, read once at startup and passed to
/// collaborators explicitly. The API key is deliberately absent: the
/// user supplies it through the form at runtime.
#[derive(Clone)]
pub struct AppConfig {
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            timeout_secs: timeout_from(env::var("GEMINI_TIMEOUT_SECS").ok()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn timeout_from(raw: Option<String>) -> u64 {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("ignoring invalid GEMINI_TIMEOUT_SECS value {raw:?}");
            DEFAULT_TIMEOUT_SECS
        }),
        None => DEFAULT_TIMEOUT_SECS,
    }
}
