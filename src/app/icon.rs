//! Window icon loading

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use winit::window::{BadIcon, Icon};

use super::config::IconRef;
use super::files::{FileError, FileRoots};

#[derive(Debug, Error)]
pub enum IconError {
    #[error(transparent)]
    Resolve(#[from] FileError),

    #[error("failed to load icon '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("icon '{}' is not usable as a window icon: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: BadIcon,
    },
}

/// A decoded RGBA icon image
#[derive(Debug, Clone)]
pub struct LoadedIcon {
    pub source: PathBuf,
    pub width: u32,
    pub height: u32,
    rgba: Vec<u8>,
}

impl LoadedIcon {
    /// Reads and decodes an image file
    pub fn load(path: &Path) -> Result<Self, IconError> {
        let image = image::open(path)
            .map_err(|source| IconError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .into_rgba8();
        let (width, height) = image.dimensions();

        Ok(Self {
            source: path.to_path_buf(),
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    pub fn to_window_icon(&self) -> Result<Icon, IconError> {
        Icon::from_rgba(self.rgba.clone(), self.width, self.height).map_err(|source| {
            IconError::Invalid {
                path: self.source.clone(),
                source,
            }
        })
    }

    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Every configured icon, decoded up front so a bad asset aborts startup
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: Vec<LoadedIcon>,
}

impl IconSet {
    pub fn load(refs: &[IconRef], roots: &FileRoots) -> Result<Self, IconError> {
        let icons = refs
            .iter()
            .map(|icon| -> Result<LoadedIcon, IconError> {
                let path = roots.resolve(&icon.path, icon.file_type)?;
                let loaded = LoadedIcon::load(&path)?;
                debug!(
                    path = %path.display(),
                    width = loaded.width,
                    height = loaded.height,
                    "Loaded icon"
                );
                Ok(loaded)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { icons })
    }

    pub fn icons(&self) -> &[LoadedIcon] {
        &self.icons
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// The icon with the most pixels; the first one wins ties
    pub fn largest(&self) -> Option<&LoadedIcon> {
        self.icons
            .iter()
            .reduce(|best, icon| if icon.area() > best.area() { icon } else { best })
    }

    /// The window icon, if any icons are configured
    pub fn window_icon(&self) -> Result<Option<Icon>, IconError> {
        self.largest().map(LoadedIcon::to_window_icon).transpose()
    }
}
