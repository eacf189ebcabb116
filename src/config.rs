//! Configuration management for jipdate
//!
//! Settings are merged from (highest priority first) command-line flags,
//! environment variables, the optional `~/.config/jipdate/config.yaml` file
//! and built-in defaults. Credentials only ever come from the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Args;
use crate::draft;
use crate::error::{Error, Result};

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "jipdate";

pub const USERNAME_VAR: &str = "JIRA_USERNAME";
pub const PASSWORD_VAR: &str = "JIRA_PASSWORD";

pub const DEFAULT_SERVER: &str = "https://dev-projects.linaro.org";
pub const DEFAULT_FILE: &str = "status_update.txt";

/// Jira login taken from the environment
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`, failing on the first missing variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username =
            lookup(USERNAME_VAR).ok_or_else(|| Error::MissingCredentials(USERNAME_VAR.into()))?;
        let password =
            lookup(PASSWORD_VAR).ok_or_else(|| Error::MissingCredentials(PASSWORD_VAR.into()))?;

        Ok(Self::new(username, password))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Contents of the YAML configuration file
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Jira base URL
    pub server: Option<String>,
    /// Default status file
    pub file: Option<PathBuf>,
    /// Name written under the draft greeting
    pub signature: Option<String>,
}

impl FileConfig {
    /// Load the file if it exists; a missing file yields the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub credentials: Credentials,
    pub file: PathBuf,
    pub signature: String,
    pub dry_run: bool,
}

impl Config {
    /// Merge flags, file settings and credentials
    pub fn resolve(args: &Args, file: FileConfig, credentials: Credentials) -> Self {
        let server = args
            .server
            .clone()
            .or(file.server)
            .unwrap_or_else(|| DEFAULT_SERVER.to_string());

        let path = args
            .file
            .clone()
            .or(file.file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

        let signature = file
            .signature
            .unwrap_or_else(|| draft::display_name(&credentials.username));

        Self {
            server,
            credentials,
            file: path,
            signature,
            dry_run: args.dry_run,
        }
    }

    /// Build the configuration for this process
    pub fn load(args: &Args) -> Result<Self> {
        let credentials = Credentials::from_env()?;
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => default_config_path()?,
        };
        let file = FileConfig::load(config_path)?;

        Ok(Self::resolve(args, file, credentials))
    }
}

/// Get the default configuration file path
///
/// Returns the path to `~/.config/jipdate/config.yaml`.
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join(PKG_NAME)
        .join("config.yaml"))
}
