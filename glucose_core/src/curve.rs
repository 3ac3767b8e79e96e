//! Curve engine.
//!
//! Assumes all glucose change is linear, even at extremes: an exercise keeps
//! lowering glucose at 50 just as it would at 120. Under that assumption the
//! curve only needs the gradient at each event boundary, and the level in
//! between is advanced one bucket at a time.
//!
//! When no effect is active, glucose settles back toward the baseline at one
//! unit per minute of granularity, and stops once it would move away from it.

use crate::timeline::{end_of_day, index_to_time};
use crate::{Boundary, Curve, Event, EventMarker, GlucoseSample, Result};

/// Fasting glucose level every day starts from and settles toward
pub const BASELINE_GLUCOSE: f64 = 80.0;

/// Running state of one sweep
#[derive(Clone, Debug, PartialEq)]
pub struct GlucoseLevel {
    pub value: f64,
    pub gradient: f64,
    pub active: usize,
}

impl Default for GlucoseLevel {
    fn default() -> Self {
        Self {
            value: BASELINE_GLUCOSE,
            gradient: 0.0,
            active: 0,
        }
    }
}

impl GlucoseLevel {
    /// Advance one bucket
    fn step(&mut self) {
        if self.active > 0 {
            self.value += self.gradient;
        } else if (self.value < BASELINE_GLUCOSE && self.gradient > 0.0)
            || (self.value > BASELINE_GLUCOSE && self.gradient < 0.0)
        {
            self.value += self.gradient;
        }
    }

    /// Apply an event boundary; effects superpose linearly
    fn apply(&mut self, event: &Event, granularity: u32) {
        match event.boundary {
            Boundary::Begin => {
                self.gradient += event.gradient;
                self.active += 1;
            }
            Boundary::End => {
                self.gradient -= event.gradient;
                self.active = self.active.saturating_sub(1);
            }
        }

        if self.active == 0 {
            self.settle(granularity);
        }
    }

    /// Point the gradient back at the baseline, discarding any leftover
    /// from the effects that just ended
    fn settle(&mut self, granularity: u32) {
        let rate = granularity as f64;
        self.gradient = if self.value > BASELINE_GLUCOSE {
            -rate
        } else if self.value < BASELINE_GLUCOSE {
            rate
        } else {
            0.0
        };
    }
}

/// Sweeps sorted events and produces one sample per bucket of the day
pub fn run(events: &[Event], granularity: u32) -> Result<Curve> {
    let end = end_of_day(granularity)?;

    let mut level = GlucoseLevel::default();
    let mut samples = Vec::with_capacity(end);
    let mut markers = Vec::with_capacity(events.len());
    let mut cursor = 0;

    for event in events {
        // Effects running past midnight don't extend the day
        let target = event.timestamp.min(end);
        advance(&mut level, &mut samples, cursor, target, granularity);
        cursor = cursor.max(target);

        level.apply(event, granularity);

        markers.push(EventMarker {
            index: event.timestamp,
            time: index_to_time(event.timestamp, granularity),
            name: event.name.clone(),
            status: event.boundary,
            gradient: event.gradient,
        });
    }

    advance(&mut level, &mut samples, cursor, end, granularity);

    tracing::debug!(
        "Swept {} events into {} samples, final glucose {:.1}",
        events.len(),
        samples.len(),
        level.value
    );

    Ok(Curve { samples, markers })
}

fn advance(
    level: &mut GlucoseLevel,
    samples: &mut Vec<GlucoseSample>,
    from: usize,
    to: usize,
    granularity: u32,
) {
    for index in from..to {
        level.step();
        samples.push(GlucoseSample {
            index,
            time: index_to_time(index, granularity),
            glucose: level.value,
        });
    }
}
