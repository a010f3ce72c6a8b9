use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub profile: ProfileConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    pub role: String,
    pub display_name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            role: "attendee".to_owned(),
            display_name: "Guest".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub banner_timeout_ms: u64,
    pub activity_limit: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner_timeout_ms: 4_000,
            activity_limit: 20,
        }
    }
}
