//! Bundled icon health check

use std::path::PathBuf;

use crate::app::icon::LoadedIcon;
use crate::app::{FileRoots, FileType};
use crate::health::check::{CheckResult, SystemCheck};
use crate::launcher::ICONS;

/// Decodes every bundled icon
///
/// A missing asset directory only warns, since development checkouts may not
/// have assets next to the binary. An icon that is present but unreadable fails.
pub struct IconAssetsCheck {
    asset_root: Option<PathBuf>,
}

impl IconAssetsCheck {
    pub fn new() -> Self {
        Self { asset_root: None }
    }

    pub fn with_asset_root(root: impl Into<PathBuf>) -> Self {
        Self {
            asset_root: Some(root.into()),
        }
    }
}

impl Default for IconAssetsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for IconAssetsCheck {
    fn name(&self) -> &'static str {
        "Icon Assets"
    }

    fn check(&self) -> CheckResult {
        let roots = FileRoots::discover(self.asset_root.as_deref());
        let mut details = Vec::new();
        let mut missing = 0;
        let mut broken = 0;

        for icon in ICONS {
            let path = match roots.resolve(icon, FileType::Internal) {
                Ok(path) => path,
                Err(e) => {
                    broken += 1;
                    details.push(format!("✗ {icon}: {e}"));
                    continue;
                }
            };

            if !path.exists() {
                missing += 1;
                details.push(format!("⚠ {}: not found", path.display()));
                continue;
            }

            match LoadedIcon::load(&path) {
                Ok(loaded) => details.push(format!(
                    "✓ {}: {}x{}",
                    path.display(),
                    loaded.width,
                    loaded.height
                )),
                Err(e) => {
                    broken += 1;
                    details.push(format!("✗ {e}"));
                }
            }
        }

        if broken > 0 {
            CheckResult::fail(format!("{broken} icon(s) unreadable")).with_details(details)
        } else if missing > 0 {
            CheckResult::warn(format!(
                "{missing} icon(s) missing under {}",
                roots.internal().display()
            ))
            .with_details(details)
        } else {
            CheckResult::pass(format!("{} icons decoded", ICONS.len())).with_details(details)
        }
    }
}
