//! Environment configuration.

use std::env;

pub const DEBUG_ENV: &str = "MESSAGE_VIEW_DEBUG";
pub const WRITE_LOG_ENV: &str = "MESSAGE_VIEW_WRITE_LOG";

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// Log dialog lifecycle at debug level instead of info.
    pub debug: bool,
    /// File that receives the dialog log, if any.
    pub write_log: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag(DEBUG_ENV),
            write_log: env_string_opt(WRITE_LOG_ENV),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
