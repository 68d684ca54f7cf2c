//! Configuration management for artado.
//!
//! This module handles loading configuration from multiple sources:
//! - TOML configuration files following XDG Base Directory specification
//! - Environment variables (`ADO_*`)
//! - Command line arguments
//!
//! Sources are merged with CLI > environment > file precedence, and every
//! resolved value remembers where it came from (see [`ParsedProperty`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use artado::Config;
//!
//! // Load configuration from file, with fallback to defaults
//! let config = Config::load_from_file().unwrap();
//!
//! // Load from environment variables
//! let env_config = Config::load_from_env();
//!
//! // Merge configurations (env takes precedence)
//! let merged = config.merge(env_config);
//! ```

use std::fs;
use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::SharedArgs;
use crate::parsed_property::ParsedProperty;

/// Environment variable for the Azure DevOps organization.
pub const ENV_ORGANIZATION: &str = "ADO_ORGANIZATION";
/// Environment variable for the Azure DevOps project.
pub const ENV_PROJECT: &str = "ADO_PROJECT";
/// Environment variable for the Basic-auth username.
pub const ENV_USERNAME: &str = "ADO_USERNAME";
/// Environment variable for the Personal Access Token.
pub const ENV_TOKEN: &str = "ADO_TOKEN";

/// Temporary struct for deserializing TOML configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    pub organization: Option<String>,
    pub project: Option<String>,
    pub username: Option<String>,
    pub token: Option<String>,
}

/// Application configuration assembled from CLI arguments, environment
/// variables, and a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Azure DevOps organization name.
    pub organization: Option<ParsedProperty<String>>,
    /// Azure DevOps project name.
    pub project: Option<ParsedProperty<String>>,
    /// Username for Basic authentication.
    pub username: Option<ParsedProperty<String>>,
    /// Personal access token for authenticating with Azure DevOps.
    pub token: Option<ParsedProperty<String>>,
}

/// Fully resolved configuration, validated to have every required value.
///
/// The token leaves the resolution step already wrapped in a `SecretString`.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Azure DevOps organization name.
    pub organization: String,
    /// Azure DevOps project name.
    pub project: String,
    /// Username for Basic authentication.
    pub username: String,
    /// Personal access token.
    pub token: SecretString,
}

impl Config {
    /// Load configuration from the XDG config directory.
    ///
    /// A missing config file is not an error; it yields an empty config.
    #[must_use = "this returns the loaded configuration which should be used"]
    pub fn load_from_file() -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let config_content =
            fs::read_to_string(&config_path).map_err(|e| ConfigError::FileReadError {
                path: config_path.clone(),
                message: e.to_string(),
            })?;

        let config_file: ConfigFile =
            toml::from_str(&config_content).map_err(|e| ConfigError::ParseError {
                path: config_path.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            organization: config_file
                .organization
                .map(|v| ParsedProperty::File(v.clone(), config_path.clone(), v)),
            project: config_file
                .project
                .map(|v| ParsedProperty::File(v.clone(), config_path.clone(), v)),
            username: config_file
                .username
                .map(|v| ParsedProperty::File(v.clone(), config_path.clone(), v)),
            token: config_file
                .token
                .map(|v| ParsedProperty::File(v.clone(), config_path.clone(), v)),
        })
    }

    /// Load configuration from `ADO_*` environment variables.
    pub fn load_from_env() -> Self {
        Self {
            organization: std::env::var(ENV_ORGANIZATION)
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            project: std::env::var(ENV_PROJECT)
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            username: std::env::var(ENV_USERNAME)
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
            token: std::env::var(ENV_TOKEN)
                .ok()
                .map(|v| ParsedProperty::Env(v.clone(), v)),
        }
    }

    /// Build configuration from parsed CLI arguments.
    pub fn from_args(args: &SharedArgs) -> Self {
        Self {
            organization: args
                .organization
                .clone()
                .map(|v| ParsedProperty::Cli(v.clone(), v)),
            project: args
                .project
                .clone()
                .map(|v| ParsedProperty::Cli(v.clone(), v)),
            username: args
                .username
                .clone()
                .map(|v| ParsedProperty::Cli(v.clone(), v)),
            token: args.token.clone().map(|v| ParsedProperty::Cli(v.clone(), v)),
        }
    }

    /// Merge two configurations; fields present in `other` take precedence.
    #[must_use = "merge returns the merged configuration"]
    pub fn merge(self, other: Self) -> Self {
        Self {
            organization: other.organization.or(self.organization),
            project: other.project.or(self.project),
            username: other.username.or(self.username),
            token: other.token.or(self.token),
        }
    }

    /// Resolve the standard source chain for one invocation.
    ///
    /// Precedence: CLI arguments, then environment, then config file.
    pub fn resolve_from(args: &SharedArgs) -> Result<ResolvedConfig, ConfigError> {
        let file = Self::load_from_file()?;
        let merged = file.merge(Self::load_from_env()).merge(Self::from_args(args));
        merged.validate()
    }

    /// Validate that every required value is present.
    ///
    /// Fails before any network call; the error names both the CLI flag and
    /// the environment variable that would satisfy the field.
    pub fn validate(self) -> Result<ResolvedConfig, ConfigError> {
        let required = |value: Option<ParsedProperty<String>>,
                        field: &str,
                        env_var: &str|
         -> Result<String, ConfigError> {
            value
                .map(ParsedProperty::into_value)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired {
                    field: field.to_string(),
                    env_var: env_var.to_string(),
                })
        };

        let organization = required(self.organization, "organization", ENV_ORGANIZATION)?;
        let project = required(self.project, "project", ENV_PROJECT)?;
        let username = required(self.username, "username", ENV_USERNAME)?;
        let token = required(self.token, "token", ENV_TOKEN)?;

        Ok(ResolvedConfig {
            organization,
            project,
            username,
            token: SecretString::from(token),
        })
    }

    /// Path of the config file: `$XDG_CONFIG_HOME/artado/config.toml`.
    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(dirs::config_dir)
            .ok_or_else(|| ConfigError::DirectoryCreationError {
                path: PathBuf::from("~/.config"),
                message: "could not determine config directory".to_string(),
            })?;

        Ok(config_dir.join("artado").join("config.toml"))
    }

    /// Write a commented sample config file, if none exists yet.
    ///
    /// Returns the path of the sample file.
    pub fn create_sample_config() -> Result<PathBuf, ConfigError> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Ok(config_path);
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationError {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }

        let sample = "\
# artado configuration
#
# Values here are overridden by ADO_* environment variables and CLI flags.

# organization = \"my-org\"
# project = \"my-project\"
# username = \"user@example.com\"
# token = \"<personal access token>\"
";

        fs::write(&config_path, sample).map_err(|e| ConfigError::FileReadError {
            path: config_path.clone(),
            message: e.to_string(),
        })?;

        Ok(config_path)
    }
}
