//! Built-in checks

pub mod build_info;
pub mod config;
pub mod icons;
pub mod launcher;

pub use build_info::BuildInfoCheck;
pub use config::SettingsCheck;
pub use icons::IconAssetsCheck;
pub use launcher::LauncherConfigCheck;
