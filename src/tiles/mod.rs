//! DawnLike tile index
//!
//! Builds a JSON index of every DawnLike tileset and the tiles that carry
//! known attributes, combining NetHack symbol names with generated floor
//! attributes.
//!
//! ```text
//! { "Objects": { "Floor": { "width": 21, "height": 39, "animated": true,
//!     "tiles": [ { "y": 3, "x": 0, "attrs": { "ground": "stone", ... } } ] } } }
//! ```

pub mod floor;
pub mod nethack;
pub mod tileset;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::info;

pub use nethack::NethackMap;
pub use tileset::Tileset;

/// Directories holding tileset sheets, in output order
pub const TILESET_DIRS: [&str; 5] = ["Characters", "Commissions", "GUI", "Items", "Objects"];

/// NetHack map file, relative to the asset directory
pub const NETHACK_MAP_FILE: &str = "nethack.map";

#[derive(Debug, Error)]
pub enum TileIndexError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("'{}' is {width}x{height}, not a whole number of tiles", path.display())]
    SheetSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("nethack map line {line}: unrecognized entry '{text}'")]
    MapSyntax { line: usize, text: String },

    #[error("nethack map line {line}: invalid tile index '{text}'")]
    MapIndex { line: usize, text: String },
}

/// Reads the DawnLike assets under `root` and builds the index
pub fn build_index(root: &Path) -> Result<Value, TileIndexError> {
    let map_path = root.join(NETHACK_MAP_FILE);
    let map_source = fs::read_to_string(&map_path).map_err(|source| TileIndexError::Io {
        path: map_path.clone(),
        source,
    })?;
    let nethack = NethackMap::parse(&map_source)?;
    let tilesets: Vec<_> = tileset::scan(root, &TILESET_DIRS)?.into_iter().collect();

    info!(
        nethack_entries = nethack.len(),
        tilesets = tilesets.len(),
        "Building tile index"
    );

    Ok(index_json(&tilesets, &nethack, &generated_attributes()))
}

/// Generated attributes keyed by (dir, sheet, y, x)
pub type GeneratedAttributes = HashMap<(String, String, u32, u32), Map<String, Value>>;

pub fn generated_attributes() -> GeneratedAttributes {
    floor::floor_attributes()
        .into_iter()
        .map(|((y, x), attrs)| (("Objects".to_string(), "Floor".to_string(), y, x), attrs))
        .collect()
}

/// Assembles the index from already-gathered parts
///
/// `tilesets` must be sorted by name within each directory. Tiles without
/// any attributes are left out.
pub fn index_json(
    tilesets: &[Tileset],
    nethack: &NethackMap,
    generated: &GeneratedAttributes,
) -> Value {
    let mut root = Map::new();

    for dir in TILESET_DIRS {
        let mut dir_json = Map::new();

        for tileset in tilesets.iter().filter(|t| t.dir == dir) {
            let mut tiles = Vec::new();

            for y in 0..tileset.height {
                for x in 0..tileset.width {
                    let mut attrs = Map::new();

                    if let Some(names) = nethack.get(&tileset.name, y * tileset.width + x) {
                        let value = match names {
                            [single] => Value::from(single.as_str()),
                            many => Value::from(many.to_vec()),
                        };
                        attrs.insert("nethack".into(), value);
                    }

                    let key = (dir.to_string(), tileset.name.clone(), y, x);
                    if let Some(extra) = generated.get(&key) {
                        attrs.extend(extra.clone());
                    }

                    if !attrs.is_empty() {
                        let mut tile = Map::new();
                        tile.insert("y".into(), y.into());
                        tile.insert("x".into(), x.into());
                        tile.insert("attrs".into(), Value::Object(attrs));
                        tiles.push(Value::Object(tile));
                    }
                }
            }

            let mut tileset_json = Map::new();
            tileset_json.insert("width".into(), tileset.width.into());
            tileset_json.insert("height".into(), tileset.height.into());
            tileset_json.insert("animated".into(), tileset.animated.into());
            tileset_json.insert("tiles".into(), Value::Array(tiles));
            dir_json.insert(tileset.name.clone(), Value::Object(tileset_json));
        }

        root.insert(dir.to_string(), Value::Object(dir_json));
    }

    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sheet(dir: &str, name: &str, width: u32, height: u32) -> Tileset {
        Tileset {
            dir: dir.into(),
            name: name.into(),
            width,
            height,
            animated: false,
        }
    }

    #[test]
    fn test_every_directory_is_present() {
        let index = index_json(&[], &NethackMap::default(), &HashMap::new());
        let dirs: Vec<_> = index.as_object().unwrap().keys().cloned().collect();
        assert_eq!(dirs, TILESET_DIRS);
    }

    #[test]
    fn test_nethack_names_by_position() {
        let nethack = NethackMap::parse(
            "giant ant:S_ant[Pest0.png] 0x3\ndog, jackal:S_dog[Pest0.png] 0x0\n",
        )
        .unwrap();
        let index = index_json(
            &[sheet("Characters", "Pest", 2, 2)],
            &nethack,
            &HashMap::new(),
        );

        assert_eq!(
            index["Characters"]["Pest"],
            json!({
                "width": 2,
                "height": 2,
                "animated": false,
                "tiles": [
                    {"y": 0, "x": 0, "attrs": {"nethack": ["dog", "jackal"]}},
                    {"y": 1, "x": 1, "attrs": {"nethack": "giant ant"}},
                ]
            })
        );
    }

    #[test]
    fn test_generated_attributes_merge_after_nethack() {
        let nethack = NethackMap::parse("floor of a room:S_room[Floor0.png] 0x0\n").unwrap();
        let mut generated = HashMap::new();
        let mut attrs = Map::new();
        attrs.insert("ground".into(), "stone".into());
        generated.insert(("Objects".to_string(), "Floor".to_string(), 0, 0), attrs);

        let index = index_json(&[sheet("Objects", "Floor", 1, 1)], &nethack, &generated);
        let tile_attrs = index["Objects"]["Floor"]["tiles"][0]["attrs"]
            .as_object()
            .unwrap();

        let keys: Vec<_> = tile_attrs.keys().map(String::as_str).collect();
        assert_eq!(keys, ["nethack", "ground"]);
    }

    #[test]
    fn test_generated_floor_uses_objects_floor() {
        let generated = generated_attributes();
        let key = ("Objects".to_string(), "Floor".to_string(), 3, 0);
        assert_eq!(generated[&key]["ground"], "stone");
    }
}
