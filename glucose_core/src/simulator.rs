//! One simulated day, end to end.
//!
//! Runs the event builder, the curve engine and the glycation metric in
//! sequence. Each call owns its own sweep state, so independent days can be
//! simulated in parallel against a shared catalog.

use crate::config::SimulationConfig;
use crate::{build_events, glycation, run, Action, Catalog, DayReport, Error, Result};

/// Parameters for a single simulation run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationSettings {
    pub granularity_minutes: u32,
    pub glycation_threshold: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationConfig::default().into()
    }
}

impl From<SimulationConfig> for SimulationSettings {
    fn from(config: SimulationConfig) -> Self {
        Self {
            granularity_minutes: config.granularity_minutes,
            glycation_threshold: config.glycation_threshold,
        }
    }
}

impl SimulationSettings {
    /// Reject a glycation threshold that no sample could be compared against
    pub fn validate(&self) -> Result<()> {
        if !self.glycation_threshold.is_finite() {
            return Err(Error::Config(format!(
                "glycation_threshold must be finite, got {}",
                self.glycation_threshold
            )));
        }
        Ok(())
    }
}

/// Simulate a day of actions
///
/// Any invalid action fails the whole day; no partial series is returned.
pub fn simulate_day(
    catalog: &Catalog,
    actions: &[Action],
    settings: &SimulationSettings,
) -> Result<DayReport> {
    settings.validate()?;
    let granularity = settings.granularity_minutes;

    let events = build_events(catalog, actions, granularity)?;
    let curve = run(&events, granularity)?;
    let glycation_minutes = glycation(&curve.samples, granularity, settings.glycation_threshold);

    let report = DayReport {
        granularity_minutes: granularity,
        glycation_threshold: settings.glycation_threshold,
        samples: curve.samples,
        markers: curve.markers,
        glycation_minutes,
    };

    if let Some(peak) = report.peak() {
        tracing::info!(
            "Simulated {} actions at {} min granularity: peak {:.1} at {}, {} min glycation",
            actions.len(),
            granularity,
            peak.glucose,
            peak.time,
            glycation_minutes
        );
    }

    Ok(report)
}
