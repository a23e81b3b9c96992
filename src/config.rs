//! Runtime settings
//!
//! Everything the launcher does not hard-wire (window geometry, frame pacing,
//! asset location, log level) comes from layered settings: a profile file
//! followed by `APP_`-prefixed environment variables.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Window and frame-pacing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Initial inner width in logical pixels
    pub width: u32,
    /// Initial inner height in logical pixels
    pub height: u32,
    pub resizable: bool,
    pub fullscreen: bool,
    /// Whether the window has a title bar and borders
    pub decorated: bool,
    /// Frame cap while focused (0 = uncapped)
    pub foreground_fps: u32,
    /// Frame cap while unfocused (0 = uncapped)
    pub background_fps: u32,
    /// Pause the game when the window loses focus
    pub pause_when_unfocused: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            resizable: true,
            fullscreen: false,
            decorated: true,
            foreground_fps: 60,
            background_fps: 60,
            pause_when_unfocused: true,
        }
    }
}

/// Bundled asset location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Overrides the discovered internal asset root
    pub root: Option<PathBuf>,
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Loads settings for a profile
    ///
    /// Sources, later ones winning:
    /// 1. `config/{profile}.toml`, searched next to the executable and then in
    ///    the current directory
    /// 2. Environment variables with prefix `APP_`, nested with `__`
    ///    (e.g. `APP_WINDOW__WIDTH=1024`)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(profile, app_environment())
    }

    /// Loads settings for a profile with an explicit environment source
    pub fn load_with_env(profile: &str, environment: Environment) -> Result<Self, ConfigError> {
        let profile_source = match Self::find_config_dir() {
            Some(dir) => File::from(dir.join(profile).as_path()).required(false),
            None => File::with_name(&format!("config/{profile}")).required(false),
        };

        Config::builder()
            .add_source(profile_source)
            .add_source(environment)
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()
    }

    /// Keeps loaded settings, or falls back to defaults and hands back the error
    ///
    /// The error is returned rather than logged so callers can report it once
    /// logging is up.
    pub fn or_default(loaded: Result<Self, ConfigError>) -> (Self, Option<ConfigError>) {
        match loaded {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Loads settings for the profile named by `APP_PROFILE` (default "release")
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    fn find_config_dir() -> Option<PathBuf> {
        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("config")))
            .filter(|dir| dir.exists());
        if beside_exe.is_some() {
            return beside_exe;
        }

        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }
}

/// `APP_` variables, nested with `__` (`APP_WINDOW__WIDTH` -> `window.width`)
pub fn app_environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowSettings::default(),
            assets: AssetSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
