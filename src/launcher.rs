//! Desktop launcher
//!
//! Builds the fixed Wizbub configuration and hands it, together with a fresh
//! [`WizbubGame`], to the runtime.

use tracing::info;

use crate::app::{FileType, LaunchError, LauncherConfig, Runtime};
use crate::config::Settings;
use crate::game::WizbubGame;

/// Window title
pub const TITLE: &str = "Wizbub";

/// Bundled window icons, largest first
pub const ICONS: [&str; 3] = [
    "dawnlike/Derived/icon128.png",
    "dawnlike/Derived/icon32.png",
    "dawnlike/Derived/icon16.png",
];

/// The desktop configuration for the given settings
///
/// Title and icons are fixed; settings only supply window geometry, frame
/// pacing and the asset root.
pub fn desktop_config(settings: &Settings) -> LauncherConfig {
    let mut config = LauncherConfig::new(TITLE)
        .with_window(settings.window.clone())
        .with_asset_root(settings.assets.root.clone());
    for icon in ICONS {
        config.add_icon(icon, FileType::Internal);
    }
    config
}

/// Starts the game, blocking until the runtime exits
pub fn launch<R: Runtime + ?Sized>(runtime: &mut R, settings: &Settings) -> Result<(), LaunchError> {
    let config = desktop_config(settings);
    info!(profile = %settings.profile, title = %config.title, "Launching");
    runtime.start(Box::new(WizbubGame::new()), config)
}
