//! Settings of the player, read once on startup.

use std::{path::Path, time::Duration};

use config::{Config, ConfigError, Environment, File, FileFormat, Source};
use serde::Deserialize;

/// Prefix of environment variables overriding [`Settings`].
const ENV_PREFIX: &str = "ZLM";

/// Settings of the player.
#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    /// Settings of the [ZLMediaKit] server to request.
    ///
    /// [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
    pub server: ServerSettings,
}

/// Settings of the [ZLMediaKit] server to request.
///
/// [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
#[derive(Clone, Debug, Deserialize)]
pub struct ServerSettings {
    /// Root URL of the server, without a trailing slash.
    pub base_url: String,

    /// Timeout of every request to the server, in seconds.
    pub timeout: u64,
}

impl ServerSettings {
    /// Returns [`ServerSettings::timeout`] as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Settings {
    /// Loads [`Settings`] from the YAML file at the given `path` (if it
    /// exists) overridden by `ZLM_SERVER__*` environment variables.
    ///
    /// # Errors
    ///
    /// If the file cannot be parsed, or some setting has an invalid type.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_sources(
            File::from(path).format(FileFormat::Yaml).required(false),
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_sources<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.base_url", "")?
            .set_default("server.timeout", 10)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}
