//! Event builder.
//!
//! Each action becomes a begin/end pair of gradient-change events. Both food
//! and exercise are assumed to change glucose linearly, so an item's total
//! impact is spread evenly over the buckets its effect lasts.

use crate::timeline::{check_granularity, time_to_index};
use crate::{Action, Boundary, Catalog, Error, Event, Result};

/// Longest effect window, in buckets, an action may produce
const MAX_STEPS: f64 = u32::MAX as f64;

/// Converts actions to events sorted by bucket index
///
/// Ties keep emission order, so events at the same bucket appear in the
/// order their actions were given.
pub fn build_events(catalog: &Catalog, actions: &[Action], granularity: u32) -> Result<Vec<Event>> {
    check_granularity(granularity)?;

    let mut events = Vec::with_capacity(actions.len() * 2);
    for action in actions {
        let item = catalog.lookup(action.kind, action.id)?;

        let duration_hours = item.duration_hours * action.volume;
        let total_impact = item.total_impact * action.volume;

        let steps = (duration_hours * 60.0 / granularity as f64).floor();
        if !steps.is_finite() || steps < 1.0 {
            return Err(Error::DegenerateAction {
                name: item.name.clone(),
                time: action.time.clone(),
                volume: action.volume,
            });
        }
        let too_long = || Error::ActionTooLong {
            name: item.name.clone(),
            time: action.time.clone(),
            volume: action.volume,
        };
        if steps > MAX_STEPS {
            return Err(too_long());
        }
        let steps = steps as usize;

        let gradient = total_impact / steps as f64;
        let start = time_to_index(&action.time, granularity)?;
        let end = start.checked_add(steps).ok_or_else(too_long)?;

        tracing::debug!(
            "{} '{}' at {}: {} steps, gradient {:.3}",
            action.kind,
            item.name,
            action.time,
            steps,
            gradient
        );

        events.push(Event {
            timestamp: start,
            name: item.name.clone(),
            gradient,
            boundary: Boundary::Begin,
        });
        events.push(Event {
            timestamp: end,
            name: item.name.clone(),
            gradient,
            boundary: Boundary::End,
        });
    }

    // Stable sort
    events.sort_by_key(|e| e.timestamp);
    Ok(events)
}
