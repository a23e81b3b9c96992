//! Launcher configuration health check

use crate::app::FileType;
use crate::config::Settings;
use crate::health::check::{CheckResult, SystemCheck};
use crate::launcher::{self, ICONS, TITLE};

/// Verifies the fixed launcher configuration
pub struct LauncherConfigCheck;

impl SystemCheck for LauncherConfigCheck {
    fn name(&self) -> &'static str {
        "Launcher Config"
    }

    fn check(&self) -> CheckResult {
        let config = launcher::desktop_config(&Settings::default());
        let paths: Vec<_> = config.icons().iter().map(|i| i.path.as_str()).collect();

        if config.title != TITLE {
            return CheckResult::fail(format!("unexpected title '{}'", config.title));
        }
        if paths != ICONS {
            return CheckResult::fail("icon list does not match the bundled icon set")
                .with_details(paths.iter().map(|p| p.to_string()).collect());
        }
        if config.icons().iter().any(|i| i.file_type != FileType::Internal) {
            return CheckResult::fail("icons must be bundled assets");
        }

        CheckResult::pass(format!("'{}' with {} icons", config.title, paths.len()))
    }
}
