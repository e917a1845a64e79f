//! Runtime settings for Tollgate.
//!
//! Settings are layered: built-in defaults, then an optional `tollgate`
//! configuration file (any format the `config` crate understands), then
//! environment variables. Environment keys use `__` both after the prefix
//! and between sections, so `TOLLGATE__SERVICES__TIMEOUT_SECONDS=3` sets
//! `services.timeout_seconds`.

use crate::iam_callback::{adapters::http::ServiceEndpoints, domain::DEFAULT_PAGE_LIMIT};
use camino::Utf8Path;
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TOLLGATE";

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "tollgate";

const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";

/// Errors raised while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("failed to load settings: {0}")]
    Load(#[from] ConfigError),

    /// The merged settings are inconsistent.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Result type for settings loading.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TollgateSettings {
    /// IAM callback handling.
    pub callback: CallbackSettings,
    /// Downstream platform services.
    pub services: ServiceSettings,
    /// Composer repositories.
    pub composer: ComposerSettings,
    /// Project database.
    pub database: DatabaseSettings,
    /// Log output.
    pub logging: LoggingSettings,
}

/// IAM callback settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CallbackSettings {
    /// Page size used when a callback omits its page.
    pub default_page_limit: u64,
}

impl Default for CallbackSettings {
    fn default() -> Self {
        Self {
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Base URLs of the platform services consulted by callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Process (pipeline) service.
    pub process_url: String,
    /// Code repository service.
    pub repository_url: String,
    /// Environment service.
    pub environment_url: String,
    /// Ticket service.
    pub ticket_url: String,
    /// Project service.
    pub project_url: String,
    /// Auth service.
    pub auth_url: String,
    /// Per-request timeout.
    pub timeout_seconds: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            process_url: DEFAULT_SERVICE_URL.to_owned(),
            repository_url: DEFAULT_SERVICE_URL.to_owned(),
            environment_url: DEFAULT_SERVICE_URL.to_owned(),
            ticket_url: DEFAULT_SERVICE_URL.to_owned(),
            project_url: DEFAULT_SERVICE_URL.to_owned(),
            auth_url: DEFAULT_SERVICE_URL.to_owned(),
            timeout_seconds: 5,
        }
    }
}

impl ServiceSettings {
    /// Returns the endpoints for the HTTP service client.
    #[must_use]
    pub fn endpoints(&self) -> ServiceEndpoints {
        ServiceEndpoints {
            process: self.process_url.clone(),
            repository: self.repository_url.clone(),
            environment: self.environment_url.clone(),
            ticket: self.ticket_url.clone(),
            project: self.project_url.clone(),
            auth: self.auth_url.clone(),
        }
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Composer repository settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ComposerSettings {
    /// Public URL prefix used in package metadata.
    pub domain: String,
    /// Directory holding stored artifacts.
    pub storage_root: String,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            domain: format!("{DEFAULT_SERVICE_URL}/composer"),
            storage_root: "data/composer".to_owned(),
        }
    }
}

impl ComposerSettings {
    /// Returns the storage root as a path.
    #[must_use]
    pub fn storage_root(&self) -> &Utf8Path {
        Utf8Path::new(&self.storage_root)
    }
}

/// Project database settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection URL. The project store is disabled when unset.
    pub url: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: None,
            pool_size: 10,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directives used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl TollgateSettings {
    /// Loads settings from the optional `tollgate` file and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source is malformed or the result
    /// fails validation.
    pub fn load() -> SettingsResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment());
        Self::from_config(builder.build()?)
    }

    /// Loads settings from an explicit file and environment map instead of
    /// the process environment.
    ///
    /// Keys of `vars` are full variable names such as
    /// `TOLLGATE__LOGGING__JSON`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when a source is malformed or the result
    /// fails validation.
    pub fn load_from<I>(file: Option<&Utf8Path>, vars: I) -> SettingsResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::with_name(path.as_str()).required(true));
        }
        let source = environment().source(Some(vars.into_iter().collect()));
        Self::from_config(builder.add_source(source).build()?)
    }

    fn from_config(config: Config) -> SettingsResult<Self> {
        let settings: Self = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> SettingsResult<()> {
        if self.callback.default_page_limit == 0 {
            return Err(SettingsError::Invalid(
                "callback.default_page_limit must be positive".to_owned(),
            ));
        }
        if self.services.timeout_seconds == 0 {
            return Err(SettingsError::Invalid(
                "services.timeout_seconds must be positive".to_owned(),
            ));
        }
        if self.composer.domain.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "composer.domain must not be empty".to_owned(),
            ));
        }
        if self.database.pool_size == 0 {
            return Err(SettingsError::Invalid(
                "database.pool_size must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
