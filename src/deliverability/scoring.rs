//! Score aggregation and summary banding.

use super::checks::CheckResult;

/// Percentage of passed checks, rounded to the nearest integer.
pub fn overall_score(checks: &[CheckResult]) -> u8 {
    if checks.is_empty() {
        return 0;
    }
    let passed = checks.iter().filter(|check| check.passed).count();
    ((passed as f64 * 100.0) / checks.len() as f64).round() as u8
}

/// Summary band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// 80 and above
    Excellent,
    /// 60 up to (not including) 80
    Good,
    /// Below 60
    NeedsAttention,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Excellent
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::NeedsAttention
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent! Your email setup looks great with strong authentication."
            }
            ScoreBand::Good => "Good setup, but there are some areas for improvement.",
            ScoreBand::NeedsAttention => {
                "Your email setup needs attention to improve deliverability."
            }
        }
    }
}
