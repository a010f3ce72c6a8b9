use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, ProfileConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub profile: Option<FileProfileConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(profile) = self.profile {
            profile.merge_into(&mut config.profile);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProfileConfig {
    pub role: Option<String>,
    pub display_name: Option<String>,
}

impl FileProfileConfig {
    fn merge_into(self, config: &mut ProfileConfig) {
        if let Some(role) = self.role {
            config.role = role;
        }

        if let Some(display_name) = self.display_name {
            config.display_name = display_name;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub banner_timeout_ms: Option<u64>,
    pub activity_limit: Option<usize>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(timeout_ms) = self.banner_timeout_ms {
            config.banner_timeout_ms = timeout_ms;
        }

        if let Some(limit) = self.activity_limit {
            config.activity_limit = limit;
        }
    }
}
