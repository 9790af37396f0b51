//! The report returned for a deliverability check.

use serde::Serialize;

use super::checks::CheckResult;
use super::recommendations::{generate_recommendations, Recommendation};
use super::scoring::{overall_score, ScoreBand};
use crate::domain::DomainName;

#[derive(Debug, Clone, Serialize)]
pub struct DeliverabilityReport {
    pub domain: String,
    /// Percentage of checks passed, 0-100
    pub overall_score: u8,
    pub summary: String,
    /// Always MX, SPF, DKIM, DMARC, Resolution
    pub checks: Vec<CheckResult>,
    pub recommendations: Vec<Recommendation>,
}

impl DeliverabilityReport {
    pub fn from_checks(domain: &DomainName, checks: Vec<CheckResult>) -> Self {
        let overall_score = overall_score(&checks);
        let recommendations = generate_recommendations(&checks);
        Self {
            domain: domain.to_string(),
            overall_score,
            summary: ScoreBand::from_score(overall_score).message().to_string(),
            checks,
            recommendations,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|check| check.passed).count()
    }
}
