//! NetHack tile map parsing
//!
//! Each non-comment line names one or more NetHack symbols and the DawnLike
//! sheet and tile index that draws them:
//!
//! ```text
//! sub ran sub questgoal solid rock:S_stone[Floor0.png] 0x0f
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::TileIndexError;

static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*):(.*)\[(.*)\.png\] (0x.*)").expect("line pattern is valid")
});

/// Tile key: sheet name (frame digit stripped) and tile index within it
pub type TileKey = (String, u32);

/// Parsed map, tile key to NetHack names
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NethackMap {
    names: HashMap<TileKey, Vec<String>>,
}

impl NethackMap {
    /// Parses the contents of a NetHack map file
    ///
    /// Blank lines and lines starting with `!` are ignored. A later entry for
    /// the same tile replaces an earlier one.
    pub fn parse(source: &str) -> Result<Self, TileIndexError> {
        let mut names = HashMap::new();

        for (number, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }

            let captures = LINE_PATTERN
                .captures(line)
                .ok_or_else(|| TileIndexError::MapSyntax {
                    line: number + 1,
                    text: line.to_string(),
                })?;

            let symbols = split_names(&captures[1])
                .into_iter()
                .map(rewrite_sub_names)
                .collect();

            let mut sheet = captures[3].to_string();
            if sheet.ends_with('0') {
                sheet.pop();
            }

            let hex = &captures[4];
            let digits = hex.trim_start_matches("0x").trim_start_matches("0X");
            let index =
                u32::from_str_radix(digits, 16).map_err(|_| TileIndexError::MapIndex {
                    line: number + 1,
                    text: hex.to_string(),
                })?;

            names.insert((sheet, index), symbols);
        }

        Ok(Self { names })
    }

    pub fn get(&self, sheet: &str, index: u32) -> Option<&[String]> {
        self.names
            .get(&(sheet.to_string(), index))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn split_names(names: &str) -> Vec<&str> {
    if names.contains(',') {
        names.split(", ").collect()
    } else if names.contains(';') {
        names.split("; ").collect()
    } else {
        vec![names]
    }
}

/// Turns `sub a sub b rest` into `a/b/rest`
pub fn rewrite_sub_names(name: &str) -> String {
    match name.strip_prefix("sub ") {
        Some(rest) => match rest.split_once(' ') {
            Some((head, tail)) => format!("{head}/{}", rewrite_sub_names(tail)),
            None => rest.to_string(),
        },
        None => name.to_string(),
    }
}
