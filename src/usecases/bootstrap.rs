use std::path::Path;

use crate::{
    domain::user::{Role, UserProfile},
    infra::{self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError},
    usecases::context::AppContext,
};

/// Loads config, resolves the active profile and initializes logging. The
/// `--role` flag wins over the config file.
pub fn bootstrap(
    config_path: Option<&Path>,
    role_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let context = build_context(config_path, role_override)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(
    config_path: Option<&Path>,
    role_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let config = config_adapter.load().map_err(AppError::Other)?;

    let profile = resolve_profile(
        role_override.unwrap_or(&config.profile.role),
        &config.profile.display_name,
    )?;

    Ok(AppContext::new(config, profile))
}

fn resolve_profile(role: &str, display_name: &str) -> Result<UserProfile, AppError> {
    let role = Role::parse(role).ok_or_else(|| AppError::UnknownRole {
        value: role.to_owned(),
    })?;

    Ok(UserProfile::new(role, display_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::config::AppConfig;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")), None)
            .expect("context should build from defaults");

        assert_eq!(context.config, AppConfig::default());
        assert_eq!(context.profile.role, Role::Attendee);
        assert_eq!(context.profile.display_name, "Guest");
    }

    #[test]
    fn cli_role_override_wins_over_config() {
        let context = build_context(Some(Path::new("./missing-config.toml")), Some("organizer"))
            .expect("context should build");

        assert_eq!(context.profile.role, Role::Organizer);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result = build_context(Some(Path::new("./missing-config.toml")), Some("admin"));

        assert!(matches!(
            result,
            Err(AppError::UnknownRole { value }) if value == "admin"
        ));
    }
}
