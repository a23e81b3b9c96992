//! Tileset sheet discovery

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::TileIndexError;

/// Pixel size of one DawnLike tile
pub const TILE_SIZE: u32 = 16;

/// Height of the caption printed under the Reptile sheets
const REPTILE_CAPTION_HEIGHT: u32 = 40;

/// One tileset sheet, possibly split over several animation frame files
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tileset {
    /// Asset directory containing the sheet
    pub dir: String,
    /// Sheet name with the frame digit stripped
    pub name: String,
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    pub animated: bool,
}

/// Scans the given directories for tileset sheets
///
/// Frame files of the same sheet (`Door0.png`, `Door1.png`) collapse into one
/// animated entry. The result is sorted by directory, then name.
pub fn scan(root: &Path, dirs: &[&str]) -> Result<BTreeSet<Tileset>, TileIndexError> {
    let mut tilesets = BTreeSet::new();

    for dir in dirs {
        let dir_path = root.join(dir);
        let entries = fs::read_dir(&dir_path).map_err(|source| TileIndexError::Io {
            path: dir_path.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| TileIndexError::Io {
                path: dir_path.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = file_name.strip_suffix(".png") else {
                continue;
            };
            let Some((name, animated)) = sheet_name(stem) else {
                continue;
            };

            let (width, height) = sheet_dimensions(&path, file_name)?;
            debug!(dir, name, width, height, animated, "Found tileset");

            tilesets.insert(Tileset {
                dir: dir.to_string(),
                name: name.to_string(),
                width,
                height,
                animated,
            });
        }
    }

    Ok(tilesets)
}

/// Splits a frame digit off a sheet stem
pub fn sheet_name(stem: &str) -> Option<(&str, bool)> {
    match stem.strip_suffix(['0', '1']) {
        Some(name) => Some((name, true)),
        None if stem.is_empty() => None,
        None => Some((stem, false)),
    }
}

/// Sheet size in tiles
fn sheet_dimensions(path: &Path, file_name: &str) -> Result<(u32, u32), TileIndexError> {
    let (width, mut height) =
        image::image_dimensions(path).map_err(|source| TileIndexError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    if file_name.starts_with("Reptile") {
        height = height.saturating_sub(REPTILE_CAPTION_HEIGHT);
    }

    if width % TILE_SIZE != 0 || height % TILE_SIZE != 0 {
        return Err(TileIndexError::SheetSize {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    Ok((width / TILE_SIZE, height / TILE_SIZE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn write_sheet(root: &Path, rel: &str, width: u32, height: u32) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        RgbaImage::new(width, height).save(path).unwrap();
    }

    #[test]
    fn test_sheet_name_frames() {
        assert_eq!(sheet_name("Door0"), Some(("Door", true)));
        assert_eq!(sheet_name("Door1"), Some(("Door", true)));
        assert_eq!(sheet_name("Ground"), Some(("Ground", false)));
        assert_eq!(sheet_name(""), None);
    }

    #[test]
    fn test_scan_collapses_frames() {
        let dir = tempfile::tempdir().unwrap();
        write_sheet(dir.path(), "Objects/Door0.png", 32, 48);
        write_sheet(dir.path(), "Objects/Door1.png", 32, 48);
        write_sheet(dir.path(), "Objects/Ground.png", 16, 16);
        fs::write(dir.path().join("Objects/readme.txt"), "x").unwrap();

        let tilesets: Vec<_> = scan(dir.path(), &["Objects"]).unwrap().into_iter().collect();

        assert_eq!(
            tilesets,
            vec![
                Tileset {
                    dir: "Objects".into(),
                    name: "Door".into(),
                    width: 2,
                    height: 3,
                    animated: true,
                },
                Tileset {
                    dir: "Objects".into(),
                    name: "Ground".into(),
                    width: 1,
                    height: 1,
                    animated: false,
                },
            ]
        );
    }

    #[test]
    fn test_reptile_caption_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_sheet(dir.path(), "Characters/Reptile0.png", 128, 112 + 40);

        let tilesets = scan(dir.path(), &["Characters"]).unwrap();
        let reptile = tilesets.iter().next().unwrap();
        assert_eq!((reptile.width, reptile.height), (8, 7));
    }

    #[test]
    fn test_odd_sheet_size_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_sheet(dir.path(), "Items/Odd.png", 20, 16);

        let err = scan(dir.path(), &["Items"]).unwrap_err();
        assert!(matches!(err, TileIndexError::SheetSize { width: 20, .. }));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            scan(dir.path(), &["GUI"]),
            Err(TileIndexError::Io { .. })
        ));
    }
}
