use crate::config::toml_config::TomlConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tamagoji")]
#[command(about = "Look after virtual pets from your terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file (defaults to ./tamagoji.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where the pet collection is saved
    #[arg(long)]
    pub data_file: Option<String>,

    /// Append-only activity log
    #[arg(long)]
    pub log_file: Option<String>,

    /// Seed the random events for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Clamp random-event effects right away instead of on the next action
    #[arg(long)]
    pub clamp_random_events: bool,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Command-line values win over the configuration file.
    pub fn apply_overrides(&self, config: &mut TomlConfig) {
        if let Some(data_file) = &self.data_file {
            config.storage.data_file = data_file.clone();
        }
        if let Some(log_file) = &self.log_file {
            config.storage.log_file = log_file.clone();
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.clamp_random_events {
            config.simulation.clamp_random_events = true;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = CliConfig::parse_from([
            "tamagoji",
            "--data-file",
            "my_pets.json",
            "--seed",
            "99",
            "-v",
        ]);
        assert_eq!(cli.data_file.as_deref(), Some("my_pets.json"));
        assert_eq!(cli.seed, Some(99));
        assert!(cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let toml_content = r#"
[storage]
data_file = "file.json"
log_file = "file.log"

[simulation]
seed = 1
"#;
        let mut config = TomlConfig::from_toml_str(toml_content).unwrap();
        let cli = CliConfig {
            data_file: Some("cli.json".to_string()),
            seed: Some(2),
            ..Default::default()
        };

        cli.apply_overrides(&mut config);

        assert_eq!(config.storage.data_file, "cli.json");
        assert_eq!(config.storage.log_file, "file.log");
        assert_eq!(config.simulation.seed, Some(2));
    }
}
