use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "confdeck", about = "Terminal conference companion")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Run as attendee, speaker or organizer (overrides the config file)
    #[arg(short, long, global = true)]
    pub role: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Start the TUI shell
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["confdeck"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.role, None);
    }

    #[test]
    fn parses_role_and_config_flags() {
        let cli = Cli::parse_from(["confdeck", "run", "--role", "speaker", "--config", "my.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.role.as_deref(), Some("speaker"));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("my.toml".to_owned())
        );
    }
}
