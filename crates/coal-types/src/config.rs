//! Runtime configuration loaded from `coalos.toml`.
//!
//! Every section and field is optional; a missing file yields the defaults,
//! which keep the classic pacing and legacy behaviour.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CoalError, Result};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COALOS_CONFIG";

/// Config file looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "coalos.toml";

/// How credential fields written as literal disjunctions are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthPolicy {
    /// Only the primary key is effectively checked for rules that were
    /// written as `x == 'a' or 'b'` (always true). Matches observed behaviour.
    #[default]
    LegacyPrimaryOnly,
    /// Every rule is checked against its accepted literals.
    Strict,
}

/// How a shell decides whether to run its fallback after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchMode {
    /// Every rule runs in order and the fallback fires unless a matched rule
    /// claims it. Valid commands can therefore be followed by the
    /// invalid-command message.
    #[default]
    Legacy,
    /// The fallback fires only when no rule matched.
    Exclusive,
}

/// `[pacing]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Multiplier applied to every narrative delay. `0.0` disables sleeping.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
        }
    }
}

/// `[audio]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct AudioConfig {
    /// Play cues on the default output device. Without a device the
    /// session runs silently either way.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory holding the cue files.
    #[serde(default = "default_sound_dir")]
    pub sound_dir: PathBuf,
}

fn default_true() -> bool {
    true
}

fn default_sound_dir() -> PathBuf {
    PathBuf::from("Dependencies/Sound")
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound_dir: default_sound_dir(),
        }
    }
}

/// `[content]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Root of an on-disk content tree. Built-in text is used when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// `[auth]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub policy: AuthPolicy,
}

/// `[dispatch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DispatchConfig {
    #[serde(default)]
    pub mode: DispatchMode,
}

/// `[games]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct GamesConfig {
    /// Command line launched by the remote `snake` command.
    #[serde(default = "default_snake")]
    pub snake: Vec<String>,
}

fn default_snake() -> Vec<String> {
    vec![
        "python".to_string(),
        "Dependencies/Tools/Snake.py".to_string(),
    ]
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            snake: default_snake(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoalConfig {
    #[serde(default)]
    pub pacing: PacingConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub games: GamesConfig,
}

impl CoalConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CoalConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        log::info!("Loaded config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Resolve the config for this process.
    ///
    /// `$COALOS_CONFIG` must point at a readable file when set. Otherwise
    /// `./coalos.toml` is used if present, and the defaults if not.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn validate(&self) -> Result<()> {
        if !self.pacing.scale.is_finite() || self.pacing.scale < 0.0 {
            return Err(CoalError::Config(format!(
                "pacing.scale must be a non-negative number, got {}",
                self.pacing.scale
            )));
        }
        Ok(())
    }
}
