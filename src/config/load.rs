use std::{env, path::PathBuf};

use ::config::{Config, Environment, File};

use super::schema::Settings;
use crate::error::{Error, Result};

/// Variable naming an explicit config file.
const CONFIG_PATH_VAR: &str = "SOUNDREACH_CONFIG_PATH";
/// Prefix for per-key overrides such as `SOUNDREACH__CATALOG__TRENDING_LIMIT`.
const ENV_PREFIX: &str = "SOUNDREACH";
const APP_DIR: &str = "soundreach";

impl Settings {
    /// Read player and catalog settings.
    ///
    /// `SOUNDREACH__<SECTION>__<KEY>` variables beat the config file, and the
    /// file beats the defaults. A missing file is not an error.
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        let layered = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(layered.try_deserialize()?)
    }

    /// Reject settings the session cannot work with: every shelf limit
    /// must show at least one song.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("catalog.trending_limit", self.catalog.trending_limit),
            ("catalog.recent_limit", self.catalog.recent_limit),
            ("catalog.related_limit", self.catalog.related_limit),
        ];
        match limits.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(Error::InvalidSettings(format!("{name} must be >= 1"))),
            None => Ok(()),
        }
    }

    /// `load` plus `validate`, with the defaults standing in on any failure.
    pub fn load_or_default() -> Self {
        match Self::load().and_then(|s| s.validate().map(|()| s)) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("using default settings: {e}");
                Self::default()
            }
        }
    }
}

/// The config file to read: `SOUNDREACH_CONFIG_PATH` when set, otherwise
/// the per-user default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `soundreach/config.toml` under the user's config directory
/// (`$XDG_CONFIG_HOME`, else `$HOME/.config`).
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
}
