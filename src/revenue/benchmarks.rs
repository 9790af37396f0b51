//! Industry benchmark table.

use serde::Serialize;

/// Share of revenue a typical business in an industry earns from each channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryBenchmark {
    pub key: &'static str,
    #[serde(rename = "name")]
    pub display_name: &'static str,
    pub email_roi_percent: u32,
    pub sms_roi_percent: u32,
}

impl IndustryBenchmark {
    const fn new(
        key: &'static str,
        display_name: &'static str,
        email_roi_percent: u32,
        sms_roi_percent: u32,
    ) -> Self {
        Self {
            key,
            display_name,
            email_roi_percent,
            sms_roi_percent,
        }
    }
}

pub const INDUSTRY_BENCHMARKS: &[IndustryBenchmark] = &[
    IndustryBenchmark::new("general", "General E-commerce", 20, 15),
    IndustryBenchmark::new("fashion", "Fashion & Apparel", 25, 20),
    IndustryBenchmark::new("beauty", "Beauty & Cosmetics", 30, 25),
    IndustryBenchmark::new("electronics", "Electronics", 18, 12),
    IndustryBenchmark::new("home", "Home & Garden", 22, 16),
    IndustryBenchmark::new("food", "Food & Beverage", 28, 22),
];

/// Looks up a benchmark by its exact key.
pub fn find_benchmark(key: &str) -> Option<&'static IndustryBenchmark> {
    INDUSTRY_BENCHMARKS.iter().find(|b| b.key == key)
}
