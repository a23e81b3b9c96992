//! File handles tagged with a storage location

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a file reference is rooted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// Bundled with the application, relative to the asset root
    Internal,
    /// Relative to the user's home directory
    External,
    /// Relative to the working directory
    Local,
    /// A full filesystem path
    Absolute,
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("cannot resolve external file '{path}': no home directory")]
    NoHomeDirectory { path: String },
}

/// Root directories that file references resolve against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRoots {
    internal: PathBuf,
    external: Option<PathBuf>,
}

impl FileRoots {
    pub fn new(internal: impl Into<PathBuf>, external: Option<PathBuf>) -> Self {
        Self {
            internal: internal.into(),
            external,
        }
    }

    /// Discovers the asset root, unless one is given explicitly
    ///
    /// Searched in order:
    /// 1. `assets/` next to the executable
    /// 2. `assets/` in the current directory
    pub fn discover(asset_root: Option<&Path>) -> Self {
        let internal = match asset_root {
            Some(root) => root.to_path_buf(),
            None => find_asset_dir(),
        };
        Self::new(internal, dirs::home_dir())
    }

    /// The directory internal files are resolved against
    pub fn internal(&self) -> &Path {
        &self.internal
    }

    /// Maps a file reference to a concrete path
    pub fn resolve(&self, path: &str, file_type: FileType) -> Result<PathBuf, FileError> {
        match file_type {
            FileType::Internal => Ok(self.internal.join(path)),
            FileType::External => self
                .external
                .as_ref()
                .map(|home| home.join(path))
                .ok_or_else(|| FileError::NoHomeDirectory {
                    path: path.to_string(),
                }),
            FileType::Local | FileType::Absolute => Ok(PathBuf::from(path)),
        }
    }
}

fn find_asset_dir() -> PathBuf {
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.exists())
    {
        return dir;
    }

    PathBuf::from("assets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_resolves_under_asset_root() {
        let roots = FileRoots::new("/opt/wizbub/assets", None);
        let path = roots
            .resolve("dawnlike/Derived/icon32.png", FileType::Internal)
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/opt/wizbub/assets/dawnlike/Derived/icon32.png")
        );
    }

    #[test]
    fn test_external_resolves_under_home() {
        let roots = FileRoots::new("assets", Some(PathBuf::from("/home/player")));
        let path = roots.resolve(".wizbub/save.json", FileType::External).unwrap();
        assert_eq!(path, PathBuf::from("/home/player/.wizbub/save.json"));
    }

    #[test]
    fn test_external_without_home_fails() {
        let roots = FileRoots::new("assets", None);
        let err = roots.resolve("save.json", FileType::External).unwrap_err();
        assert!(matches!(err, FileError::NoHomeDirectory { .. }));
    }

    #[test]
    fn test_local_and_absolute_are_untouched() {
        let roots = FileRoots::new("assets", None);
        assert_eq!(
            roots.resolve("icon.png", FileType::Local).unwrap(),
            PathBuf::from("icon.png")
        );
        assert_eq!(
            roots.resolve("/tmp/icon.png", FileType::Absolute).unwrap(),
            PathBuf::from("/tmp/icon.png")
        );
    }

    #[test]
    fn test_explicit_root_wins_over_discovery() {
        let roots = FileRoots::discover(Some(Path::new("/srv/assets")));
        assert_eq!(roots.internal(), Path::new("/srv/assets"));
    }
}
