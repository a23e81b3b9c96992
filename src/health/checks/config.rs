//! Settings health check

use crate::config::Settings;
use crate::health::check::{CheckResult, SystemCheck};

/// Loads settings for each profile
pub struct SettingsCheck {
    profiles: Vec<&'static str>,
}

impl SettingsCheck {
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for SettingsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SettingsCheck {
    fn name(&self) -> &'static str {
        "Settings"
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = 0;

        for profile in &self.profiles {
            match Settings::load(profile) {
                Ok(settings) => details.push(format!(
                    "✓ '{}': {}x{} @ {} fps",
                    profile,
                    settings.window.width,
                    settings.window.height,
                    settings.window.foreground_fps
                )),
                Err(e) => {
                    failed += 1;
                    details.push(format!("✗ '{profile}': {e}"));
                }
            }
        }

        if failed > 0 {
            CheckResult::fail(format!("{failed} profile(s) failed to load")).with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles loaded", self.profiles.len()))
                .with_details(details)
        }
    }
}
