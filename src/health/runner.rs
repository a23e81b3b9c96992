//! Runs checks and collects their results

use std::time::Instant;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results of a check run
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    pub results: Vec<(&'static str, CheckResult)>,
}

impl HealthCheckReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn count(&self, status: CheckStatus) -> usize {
        self.results.iter().filter(|(_, r)| r.status == status).count()
    }

    /// True if no check failed
    pub fn is_healthy(&self) -> bool {
        self.count(CheckStatus::Fail) == 0
    }

    /// 0 when everything passed, 1 on any failure, 2 on warnings only
    pub fn exit_code(&self) -> i32 {
        if self.count(CheckStatus::Fail) > 0 {
            1
        } else if self.count(CheckStatus::Warn) > 0 {
            2
        } else {
            0
        }
    }
}

/// Runs checks in registration order
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn run(self) -> HealthCheckReport {
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let start = Instant::now();
                let mut result = check.check();
                result.duration = start.elapsed();
                tracing::debug!(
                    check = check.name(),
                    status = ?result.status,
                    "Health check finished"
                );
                (check.name(), result)
            })
            .collect();

        HealthCheckReport { results }
    }
}
