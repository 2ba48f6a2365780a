//! Configuration structures for the hotel desk session
//!
//! This module contains the session configuration and validation logic used
//! by the interactive menu binary: the registry identity, an optional set of
//! hotels seeded at startup, and the CLI argument structure that layers on
//! top of an optional JSON configuration file.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A hotel created at session startup from configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelSeed {
    /// Hotel name
    pub name: String,
    /// Hotel location
    pub location: String,
    /// Initial total room count
    pub total_rooms: i64,
    /// Initial facility list
    #[serde(default)]
    pub facilities: Vec<String>,
}

/// Session configuration for the interactive menu
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Display name of the administrator owning the registry
    pub registry_name: String,
    /// Administrator secret for the session
    pub admin_secret: String,
    /// Hotels to create before the menu starts
    #[serde(default)]
    pub seed_hotels: Vec<HotelSeed>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            registry_name: "Front Desk".to_string(),
            admin_secret: "admin123".to_string(),
            seed_hotels: Vec::new(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }

    /// Build the effective configuration from CLI arguments
    ///
    /// Priority: CLI flags override file settings, which override defaults.
    pub fn from_cli_args(args: CliArgs) -> Result<Self, String> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(name) = args.registry_name {
            config.registry_name = name;
        }
        if let Some(secret) = args.admin_secret {
            config.admin_secret = secret;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.registry_name.is_empty() {
            return Err("registry_name must not be empty".to_string());
        }
        if self.admin_secret.is_empty() {
            return Err("admin_secret must not be empty".to_string());
        }
        for seed in &self.seed_hotels {
            if seed.name.is_empty() {
                return Err("seed hotel name must not be empty".to_string());
            }
            if seed.location.is_empty() {
                return Err(format!("seed hotel '{}' has an empty location", seed.name));
            }
            if seed.total_rooms < 0 {
                return Err(format!(
                    "seed hotel '{}' has a negative room count ({})",
                    seed.name, seed.total_rooms
                ));
            }
        }
        Ok(())
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hoteldesk",
    version,
    about = "Interactive hotel registry with room booking, reviews, and role-based management",
    long_about = "Runs an interactive menu session over an in-memory hotel registry. \
Administrators create and remove hotels, agents maintain room counts and facilities, \
and users book rooms, check out, and leave ratings and reviews.

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag, JSON format)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(short, long, help = "Configuration file path (JSON format)")]
    pub config: Option<String>,

    /// Display name of the administrator owning the registry
    #[arg(long, help = "Administrator display name")]
    pub registry_name: Option<String>,

    /// Administrator secret for the session
    #[arg(long, help = "Administrator secret")]
    pub admin_secret: Option<String>,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,

    /// Validate configuration and exit without starting the menu
    #[arg(long, help = "Validate configuration without starting the session")]
    pub dry_run: bool,

    /// Enable verbose (INFO level) logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug (DEBUG level) logging
    #[arg(long, help = "Enable debug logging")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MenuConfig::default();
        assert_eq!(config.registry_name, "Front Desk");
        assert_eq!(config.admin_secret, "admin123");
        assert!(config.seed_hotels.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let mut config = MenuConfig::default();
        config.registry_name.clear();
        assert!(config.validate().is_err());

        let mut config = MenuConfig::default();
        config.admin_secret.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_seed_hotels() {
        let mut config = MenuConfig::default();
        config.seed_hotels.push(HotelSeed {
            name: "Grand".to_string(),
            location: "City".to_string(),
            total_rooms: -1,
            facilities: Vec::new(),
        });
        assert!(config.validate().is_err());

        config.seed_hotels[0].total_rooms = 10;
        config.seed_hotels[0].location.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = MenuConfig {
            registry_name: "Desk".to_string(),
            admin_secret: "s3cret".to_string(),
            seed_hotels: vec![HotelSeed {
                name: "Grand".to_string(),
                location: "City".to_string(),
                total_rooms: 10,
                facilities: vec!["Pool".to_string()],
            }],
        };

        let json = config.print_json().unwrap();
        let parsed: MenuConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_cli_overrides() {
        let args = CliArgs {
            config: None,
            registry_name: Some("Night Desk".to_string()),
            admin_secret: Some("override".to_string()),
            print_config: false,
            dry_run: false,
            verbose: false,
            debug: false,
        };

        let config = MenuConfig::from_cli_args(args).unwrap();
        assert_eq!(config.registry_name, "Night Desk");
        assert_eq!(config.admin_secret, "override");
    }

    #[test]
    fn test_seed_hotels_default_when_absent() {
        let parsed: MenuConfig = serde_json::from_str(
            r#"{"registry_name": "Desk", "admin_secret": "x"}"#,
        )
        .unwrap();
        assert!(parsed.seed_hotels.is_empty());
    }
}
