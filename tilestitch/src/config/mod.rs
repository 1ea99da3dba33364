//! Configuration file support.
//!
//! Settings live in an INI file at `<config_dir>/tilestitch/config.ini`
//! (e.g., `~/.config/tilestitch/config.ini` on Linux):
//!
//! ```ini
//! [stitch]
//! compositor = native      ; native | magick
//! keep_slices = true
//!
//! [magick]
//! command = magick
//! ```
//!
//! CLI flags take precedence over the config file, which takes precedence
//! over built-in defaults. A missing file is not an error; callers use
//! `ConfigFile::load().unwrap_or_default()`.

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;

/// Errors loading or interpreting the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or parsed.
    #[error("cannot load config file: {0}")]
    Load(String),

    /// A setting has a value outside its accepted set.
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

/// Compositing backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositorChoice {
    /// In-process compositing with the `image` crate.
    #[default]
    Native,
    /// External ImageMagick process.
    Magick,
}

impl CompositorChoice {
    /// Parse from a config file string.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "native" => Some(CompositorChoice::Native),
            "magick" => Some(CompositorChoice::Magick),
            _ => None,
        }
    }
}

/// `[stitch]` section.
#[derive(Debug, Clone)]
pub struct StitchSection {
    /// Compositing backend to use.
    pub compositor: CompositorChoice,
    /// Whether row-strip files survive the run.
    pub keep_slices: bool,
}

impl Default for StitchSection {
    fn default() -> Self {
        Self {
            compositor: CompositorChoice::Native,
            keep_slices: true,
        }
    }
}

/// `[magick]` section.
#[derive(Debug, Clone)]
pub struct MagickSection {
    /// ImageMagick binary to spawn.
    pub command: String,
}

impl Default for MagickSection {
    fn default() -> Self {
        Self {
            command: "magick".to_string(),
        }
    }
}

/// Loaded configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub stitch: StitchSection,
    pub magick: MagickSection,
}

impl ConfigFile {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tilestitch").join("config.ini"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()
            .ok_or_else(|| ConfigError::Load("no config directory".to_string()))?;
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Load(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("stitch")) {
            if let Some(value) = section.get("compositor") {
                config.stitch.compositor = CompositorChoice::from_config_str(value).ok_or(
                    ConfigError::InvalidValue {
                        key: "stitch.compositor".to_string(),
                        value: value.to_string(),
                    },
                )?;
            }
            if let Some(value) = section.get("keep_slices") {
                config.stitch.keep_slices = parse_bool("stitch.keep_slices", value)?;
            }
        }

        if let Some(section) = ini.section(Some("magick")) {
            if let Some(value) = section.get("command") {
                config.magick.command = value.to_string();
            }
        }

        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
