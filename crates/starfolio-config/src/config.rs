//! Configuration structs with defaults and TOML persistence.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starfolio_core::{BackgroundStyle, Language, Variant};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Presentation variant.
    pub variant: Variant,
    /// Starting language. Switching at runtime is not saved.
    pub language: Language,
    /// Background animation style.
    pub background: BackgroundStyle,
    pub animation: AnimationConfig,
    pub textures: TextureConfig,
    pub log: LogConfig,
}

/// Frame driver and simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Target frames per second.
    pub fps: u32,
    /// Logical units per raster pixel.
    pub scale: f32,
    /// Fixed RNG seed; the clock is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Planet texture loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextureConfig {
    /// Fetch textures at startup.
    pub enabled: bool,
    /// Per-request timeout.
    pub timeout_secs: u64,
    /// Local image per planet name, used instead of the download.
    pub paths: BTreeMap<String, PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "starfolio=debug".
    pub level: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            scale: 8.0,
            seed: None,
        }
    }
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 10,
            paths: BTreeMap::new(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AnimationConfig {
    const MIN_SCALE: f32 = 1.0;
    const MAX_SCALE: f32 = 64.0;

    /// Logical units per pixel, clamped to 1-64.
    pub fn canvas_scale(&self) -> f32 {
        if self.scale.is_finite() {
            self.scale.clamp(Self::MIN_SCALE, Self::MAX_SCALE)
        } else {
            AnimationConfig::default().scale
        }
    }

    /// Time budget of one frame. The rate is clamped to 1-240 fps.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.clamp(1, 240)))
    }
}

/// Platform directories for the application.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "starfolio")
}

/// Default location of the config file.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for runtime files such as the log.
pub fn default_data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
}

impl Config {
    /// Load the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Load the config file, or `None` if it does not exist.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Write)?;
        }
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, contents).map_err(ConfigError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.variant, Variant::OnePage);
        assert_eq!(config.language, Language::Pt);
        assert_eq!(config.background, BackgroundStyle::Auto);
        assert_eq!(config.animation.fps, 60);
        assert!(config.textures.enabled);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_default_config_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("variant = \"routed\"\n[animation]\nfps = 30\n").unwrap();
        assert_eq!(config.variant, Variant::Routed);
        assert_eq!(config.animation.fps, 30);
        assert_eq!(config.animation.scale, 8.0);
        assert_eq!(config.language, Language::Pt);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let config: Config = toml::from_str("language = \"ES\"\nshiny = true\n").unwrap();
        assert_eq!(config.language, Language::Es);
    }

    #[test]
    fn test_invalid_value_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "background = \"matrix\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = Config::default();
        config.background = BackgroundStyle::Cosmos;
        config.animation.seed = Some(42);
        config
            .textures
            .paths
            .insert("Earth".to_string(), PathBuf::from("/tmp/earth.png"));
        config.save(&path).unwrap();

        assert_eq!(Config::load_optional(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_optional(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, None);
    }

    #[test]
    fn test_frame_interval_clamped() {
        let mut animation = AnimationConfig::default();
        assert_eq!(animation.frame_interval(), Duration::from_micros(16_666));
        animation.fps = 0;
        assert_eq!(animation.frame_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_canvas_scale_clamped() {
        let mut animation = AnimationConfig::default();
        assert_eq!(animation.canvas_scale(), 8.0);
        animation.scale = 0.01;
        assert_eq!(animation.canvas_scale(), 1.0);
        animation.scale = 1000.0;
        assert_eq!(animation.canvas_scale(), 64.0);
        animation.scale = f32::NAN;
        assert_eq!(animation.canvas_scale(), 8.0);
    }
}
