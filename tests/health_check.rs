//! Integration tests for the startup diagnostics

use wizbub::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(report.is_healthy(), "Health checks failed");
    assert_eq!(report.total(), 4);
}

#[test]
fn test_settings_check() {
    let result = SettingsCheck::new().check();
    assert!(result.status.is_ok(), "Settings check failed: {}", result.message);
}

#[test]
fn test_launcher_config_check() {
    let result = LauncherConfigCheck.check();
    assert_eq!(result.status, CheckStatus::Pass, "{}", result.message);
}

#[test]
fn test_bundled_icons_decode() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");
    let result = IconAssetsCheck::with_asset_root(root).check();
    assert_eq!(result.status, CheckStatus::Pass, "{}", result.message);
    assert_eq!(result.details.len(), 3);
}

#[test]
fn test_missing_asset_root_warns() {
    let dir = tempfile::tempdir().unwrap();
    let result = IconAssetsCheck::with_asset_root(dir.path()).check();
    assert_eq!(result.status, CheckStatus::Warn);
}

#[test]
fn test_corrupt_icon_fails() {
    let dir = tempfile::tempdir().unwrap();
    let icon_dir = dir.path().join("dawnlike/Derived");
    std::fs::create_dir_all(&icon_dir).unwrap();
    std::fs::write(icon_dir.join("icon128.png"), b"not an image").unwrap();

    let result = IconAssetsCheck::with_asset_root(dir.path()).check();
    assert_eq!(result.status, CheckStatus::Fail);
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck.check();
    assert!(result.status.is_ok());
    assert!(!result.details.is_empty());
}

#[test]
fn test_report_exit_code_matches_counts() {
    let report = HealthCheckRunner::new()
        .add_check(SettingsCheck::new())
        .add_check(LauncherConfigCheck)
        .run();

    assert_eq!(report.total(), 2);
    let expected = if report.count(CheckStatus::Fail) > 0 {
        1
    } else if report.count(CheckStatus::Warn) > 0 {
        2
    } else {
        0
    };
    assert_eq!(report.exit_code(), expected);
}
