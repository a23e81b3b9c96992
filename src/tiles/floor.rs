//! Generated attributes for the `Objects/Floor` sheet
//!
//! The floor sheet is laid out as a grid of material groups. Each group has
//! one block per colour, and each block repeats the same 7x3 edge pattern.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Rows of documentation at the top of the floor sheet
const HEADER_ROWS: u32 = 3;

const FLOOR_PATTERN: [[Option<&str>; 7]; 3] = [
    [Some("tl"), Some("t"), Some("tr"), Some("trl"), None, Some("trbl"), None],
    [Some("l"), Some("fill"), Some("r"), Some("rl"), Some("tbl"), Some("tb"), Some("trb")],
    [Some("bl"), Some("b"), Some("rb"), Some("rbl"), None, None, None],
];

const STONE_COLORS: [&str; 4] = ["sky", "slate", "olive", "iron"];
const DIRT_COLORS: [&str; 4] = ["peach", "ocher", "earth", "iron"];
const WOOD_COLORS: [&str; 4] = ["peach", "ocher", "olive", "earth"];

const COLORS_PER_GROUP: u32 = 4;
const PATTERN_ROWS: u32 = FLOOR_PATTERN.len() as u32;
const PATTERN_COLS: u32 = FLOOR_PATTERN[0].len() as u32;

/// A material, its colours, and what its edges blend into
struct FloorGroup {
    ground: &'static str,
    colors: [&'static str; 4],
    /// `"edge"` means a plain border rather than another material
    other: &'static str,
    other_colors: [&'static str; 4],
}

const fn group(
    ground: &'static str,
    colors: [&'static str; 4],
    other: &'static str,
    other_colors: [&'static str; 4],
) -> FloorGroup {
    FloorGroup {
        ground,
        colors,
        other,
        other_colors,
    }
}

fn floor_groups() -> [Vec<FloorGroup>; 3] {
    [
        vec![
            group("stone", STONE_COLORS, "edge", STONE_COLORS),
            group("grass", ["sky", "leaf", "olive", "midnight"], "dirt", DIRT_COLORS),
            group("rock", DIRT_COLORS, "dirt", DIRT_COLORS),
        ],
        vec![
            group("dirt", DIRT_COLORS, "edge", ["maize", "peach", "berry", "earth"]),
            group("wood", WOOD_COLORS, "edge", WOOD_COLORS),
            group(
                "sand",
                ["peppermint/maize", "peppermint/sky", "sky", "slate"],
                "dirt",
                DIRT_COLORS,
            ),
        ],
        vec![group(
            "furrows",
            ["ocher", "earth", "iron", "midnight"],
            "dirt",
            DIRT_COLORS,
        )],
    ]
}

/// Attributes for every patterned floor tile, keyed by (y, x) in tiles
pub fn floor_attributes() -> HashMap<(u32, u32), Map<String, Value>> {
    let mut tiles = HashMap::new();

    for (group_row, groups) in (0u32..).zip(floor_groups()) {
        for (group_col, group) in (0u32..).zip(&groups) {
            let colors = group.colors.iter().zip(&group.other_colors);
            for (color_row, (color, other_color)) in (0u32..).zip(colors) {
                for (pattern_row, codes) in (0u32..).zip(&FLOOR_PATTERN) {
                    for (pattern_col, code) in (0u32..).zip(codes) {
                        let Some(code) = code else {
                            continue;
                        };

                        let y = HEADER_ROWS
                            + group_row * COLORS_PER_GROUP * PATTERN_ROWS
                            + color_row * PATTERN_ROWS
                            + pattern_row;
                        let x = group_col * PATTERN_COLS + pattern_col;

                        tiles.insert((y, x), tile_attributes(group, color, other_color, code));
                    }
                }
            }
        }
    }

    tiles
}

fn tile_attributes(
    group: &FloorGroup,
    color: &str,
    other_color: &str,
    code: &str,
) -> Map<String, Value> {
    let mut attrs = Map::new();
    attrs.insert("ground".into(), group.ground.into());
    attrs.insert("color".into(), color.into());

    if code != "fill" {
        if group.other != "edge" {
            attrs.insert("edge".into(), group.other.into());
        }
        attrs.insert("edge_dirs".into(), code.into());
        if other_color != color {
            attrs.insert("edge_color".into(), other_color.into());
        }
    }

    attrs
}
