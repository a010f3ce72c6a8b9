use crate::{domain::user::UserProfile, infra::config::AppConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    pub config: AppConfig,
    pub profile: UserProfile,
}

impl AppContext {
    pub fn new(config: AppConfig, profile: UserProfile) -> Self {
        Self { config, profile }
    }
}
