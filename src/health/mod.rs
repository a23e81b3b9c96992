//! Startup diagnostics
//!
//! Each [`SystemCheck`] inspects one piece of the launch path (settings,
//! launcher configuration, bundled icons, build metadata) without opening a
//! window, so the checks can run in CI and from `wizbub-doctor`.
//!
//! # Example
//!
//! ```no_run
//! use wizbub::health::{HealthCheckRunner, checks::*};
//!
//! let report = HealthCheckRunner::new()
//!     .add_check(SettingsCheck::new())
//!     .add_check(IconAssetsCheck::new())
//!     .run();
//!
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

/// Runs every built-in check
pub fn run_all_checks() -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::SettingsCheck::new())
        .add_check(checks::LauncherConfigCheck)
        .add_check(checks::IconAssetsCheck::new())
        .add_check(checks::BuildInfoCheck)
        .run()
}
