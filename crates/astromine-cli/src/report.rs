//! Test-case parsing and report formatting.

use anyhow::{Context, Result};
use astromine_schedule::MiningPlan;
use serde::Serialize;

/// One computed plan alongside the expected answer it is checked against.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// The computed plan, flattened into the report.
    #[serde(flatten)]
    pub plan: MiningPlan,
    /// Expected total days from the input.
    pub expected_days: u64,
}

impl CaseReport {
    pub fn new(plan: MiningPlan, expected_days: u64) -> Self {
        Self {
            plan,
            expected_days,
        }
    }

    /// Whether the computed total matches the expectation.
    pub fn matches(&self) -> bool {
        self.plan.total_days == self.expected_days
    }

    /// Format the classic comparison line:
    /// `{units} units => {total} days [{expected} days expected]`.
    pub fn comparison_line(&self) -> String {
        format!(
            "{} units => {} days [{} days expected]",
            self.plan.units, self.plan.total_days, self.expected_days
        )
    }
}

/// Parse one test-case line of the form `<units> <expected_days>`.
pub fn parse_case_line(line: &str) -> Result<(u64, u64)> {
    let mut fields = line.split_whitespace();
    let units: u64 = fields
        .next()
        .context("Missing units field")?
        .parse()
        .context("Invalid units field")?;
    let expected: u64 = fields
        .next()
        .context("Missing expected days field")?
        .parse()
        .context("Invalid expected days field")?;
    if fields.next().is_some() {
        anyhow::bail!("Trailing data after expected days");
    }
    Ok((units, expected))
}
