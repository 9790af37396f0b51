//! Email and SMS marketing revenue projections.
//!
//! Projects the monthly revenue a business could add through email and SMS
//! marketing, using fixed per-industry benchmarks for the share of revenue
//! each channel typically contributes.

mod benchmarks;

use serde::{Deserialize, Serialize};

use crate::error_handling::{RevenueError, ValidationError};

pub use benchmarks::{find_benchmark, IndustryBenchmark, INDUSTRY_BENCHMARKS};

/// Input to `calculate_revenue`.
#[derive(Debug, Clone, Deserialize)]
pub struct RevenueRequest {
    pub monthly_revenue: f64,
    pub industry: String,
    pub has_email_marketing: bool,
    pub has_sms_marketing: bool,
    #[serde(default)]
    pub current_email_revenue: Option<f64>,
    #[serde(default)]
    pub current_sms_revenue: Option<f64>,
}

impl RevenueRequest {
    /// Rejects negative or non-finite amounts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let amounts = [
            ("monthly_revenue", Some(self.monthly_revenue)),
            ("current_email_revenue", self.current_email_revenue),
            ("current_sms_revenue", self.current_sms_revenue),
        ];
        for (field, amount) in amounts {
            if let Some(value) = amount {
                if !value.is_finite() || value < 0.0 {
                    return Err(ValidationError::InvalidAmount { field });
                }
            }
        }
        Ok(())
    }
}

/// A pair of per-channel amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelFigures {
    pub email: f64,
    pub sms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkPercentages {
    pub email_roi_percent: u32,
    pub sms_roi_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    pub email: String,
    pub sms: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationBreakdown {
    pub industry_benchmarks: BenchmarkPercentages,
    /// Benchmark share of monthly revenue, before subtracting current revenue
    pub max_potential: ChannelFigures,
    pub current_performance: ChannelFigures,
    pub improvement_potential: ChannelFigures,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueReport {
    pub current_monthly: f64,
    pub current_email_revenue: f64,
    pub current_sms_revenue: f64,
    pub email_potential: f64,
    pub sms_potential: f64,
    pub total_monthly_increase: f64,
    pub annual_potential: f64,
    /// Display name of the industry
    pub industry: String,
    pub calculation_breakdown: CalculationBreakdown,
}

/// Additional revenue available from a channel.
///
/// A channel already in use can only grow up to the benchmark; one not in use
/// is credited with the full benchmark share.
fn channel_potential(in_use: bool, max_potential: f64, current: f64) -> f64 {
    if in_use {
        (max_potential - current).max(0.0)
    } else {
        max_potential
    }
}

/// Projects the revenue uplift for `request`.
///
/// Amounts are used as given; call `RevenueRequest::validate` first to reject
/// negative or non-finite input.
///
/// # Errors
///
/// Returns `RevenueError::InvalidIndustry` if the industry key is not in the
/// benchmark table.
pub fn calculate_revenue(request: &RevenueRequest) -> Result<RevenueReport, RevenueError> {
    let benchmark =
        find_benchmark(&request.industry).ok_or_else(|| RevenueError::InvalidIndustry {
            industry: request.industry.clone(),
        })?;

    let monthly = request.monthly_revenue;
    let current = ChannelFigures {
        email: request.current_email_revenue.unwrap_or(0.0),
        sms: request.current_sms_revenue.unwrap_or(0.0),
    };
    let max_potential = ChannelFigures {
        email: monthly * (f64::from(benchmark.email_roi_percent) / 100.0),
        sms: monthly * (f64::from(benchmark.sms_roi_percent) / 100.0),
    };
    let improvement = ChannelFigures {
        email: channel_potential(
            request.has_email_marketing,
            max_potential.email,
            current.email,
        ),
        sms: channel_potential(request.has_sms_marketing, max_potential.sms, current.sms),
    };

    let total_monthly_increase = improvement.email + improvement.sms;

    log::debug!(
        "Revenue projection for {} at {:.2}/month: +{:.2}/month",
        benchmark.key,
        monthly,
        total_monthly_increase
    );

    Ok(RevenueReport {
        current_monthly: monthly,
        current_email_revenue: current.email,
        current_sms_revenue: current.sms,
        email_potential: improvement.email,
        sms_potential: improvement.sms,
        total_monthly_increase,
        annual_potential: total_monthly_increase * 12.0,
        industry: benchmark.display_name.to_string(),
        calculation_breakdown: CalculationBreakdown {
            industry_benchmarks: BenchmarkPercentages {
                email_roi_percent: benchmark.email_roi_percent,
                sms_roi_percent: benchmark.sms_roi_percent,
            },
            max_potential,
            current_performance: current,
            improvement_potential: improvement,
            explanation: Explanation {
                email: format!(
                    "Based on {} industry average of {}% revenue from email marketing",
                    benchmark.display_name, benchmark.email_roi_percent
                ),
                sms: format!(
                    "Based on {} industry average of {}% revenue from SMS marketing",
                    benchmark.display_name, benchmark.sms_roi_percent
                ),
            },
        },
    })
}
