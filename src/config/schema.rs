use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/soundreach/config.toml` or `~/.config/soundreach/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SOUNDREACH__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub player: PlayerSettings,
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// What next/previous do when the loaded track is not in the queue.
    pub missing_track: MissingTrackSetting,
    /// Whether the full player starts open.
    pub start_expanded: bool,
}

#[derive(Debug, Copy, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTrackSetting {
    #[default]
    #[serde(alias = "wrap_to_first", alias = "wrap", alias = "first")]
    WrapToFirst,
    #[serde(alias = "noop", alias = "no-op", alias = "ignore")]
    Stay,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Optional TOML catalog file. The demo catalog is used when unset.
    pub path: Option<PathBuf>,
    /// How many songs the trending shelf shows.
    pub trending_limit: usize,
    /// How many songs the new releases shelf shows.
    pub recent_limit: usize,
    /// How many related songs a song page shows.
    pub related_limit: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: None,
            trending_limit: 6,
            recent_limit: 5,
            related_limit: 5,
        }
    }
}
