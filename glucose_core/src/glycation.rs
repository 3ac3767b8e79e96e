//! Glycation metric.
//!
//! For every minute glucose stays at or above the threshold, glycation goes
//! up by one. It is a coarse proxy for sugar binding to proteins in the
//! bloodstream, which raises heart disease risk.

use crate::GlucoseSample;

/// Glucose level at which glycation starts accumulating
pub const DEFAULT_GLYCATION_THRESHOLD: f64 = 150.0;

/// Minutes spent at or above `threshold`
pub fn glycation(samples: &[GlucoseSample], granularity: u32, threshold: f64) -> u32 {
    let mut count = 0u32;
    for sample in samples.iter().filter(|s| s.glucose >= threshold) {
        tracing::debug!(
            "High glucose at {} (index {}): {:.2}",
            sample.time,
            sample.index,
            sample.glucose
        );
        count += 1;
    }
    count * granularity
}
