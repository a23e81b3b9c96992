//! Application configuration handed to the runtime at startup

use std::path::PathBuf;

use crate::config::WindowSettings;

use super::files::FileType;

/// A reference to an icon image and where it is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRef {
    pub path: String,
    pub file_type: FileType,
}

/// Configuration consumed once by [`Runtime::start`](super::Runtime::start)
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    /// Window title
    pub title: String,
    /// Window geometry and frame pacing
    pub window: WindowSettings,
    /// Overrides the discovered internal asset root
    pub asset_root: Option<PathBuf>,
    icons: Vec<IconRef>,
}

impl LauncherConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: WindowSettings::default(),
            asset_root: None,
            icons: Vec::new(),
        }
    }

    pub fn with_window(mut self, window: WindowSettings) -> Self {
        self.window = window;
        self
    }

    pub fn with_asset_root(mut self, root: Option<PathBuf>) -> Self {
        self.asset_root = root;
        self
    }

    /// Appends an icon; list them largest first
    pub fn add_icon(&mut self, path: impl Into<String>, file_type: FileType) {
        self.icons.push(IconRef {
            path: path.into(),
            file_type,
        });
    }

    /// Icons in the order they were added
    pub fn icons(&self) -> &[IconRef] {
        &self.icons
    }
}
