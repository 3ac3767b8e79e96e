//! Core domain types for the glucose simulator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Catalog items and their kinds
//! - Actions supplied by the caller
//! - Gradient-change events produced by the event builder
//! - Samples and markers produced by the curve engine

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// Catalog Types
// ============================================================================

/// Kind of catalog item
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Food,
    Exercise,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Food => f.write_str("food"),
            ItemKind::Exercise => f.write_str("exercise"),
        }
    }
}

/// A reference item (e.g., "Pumpernickel bread" or "Running")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub kind: ItemKind,
    pub id: u32,
    pub name: String,
    /// Signed: positive for food, negative for exercise
    pub total_impact: f64,
    pub duration_hours: f64,
}

/// The complete reference catalog, keyed by identifier within each kind
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub foods: HashMap<u32, CatalogItem>,
    pub exercises: HashMap<u32, CatalogItem>,
}

// ============================================================================
// Action and Event Types
// ============================================================================

/// Eating a food or doing an exercise at a given clock time
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Action {
    /// 24h "HH:MM"
    pub time: String,
    pub kind: ItemKind,
    pub id: u32,
    /// Serving-size multiplier
    pub volume: f64,
}

impl Action {
    pub fn new(time: impl Into<String>, kind: ItemKind, id: u32, volume: f64) -> Self {
        Self {
            time: time.into(),
            kind,
            id,
            volume,
        }
    }

    pub fn food(time: impl Into<String>, id: u32, volume: f64) -> Self {
        Self::new(time, ItemKind::Food, id, volume)
    }

    pub fn exercise(time: impl Into<String>, id: u32, volume: f64) -> Self {
        Self::new(time, ItemKind::Exercise, id, volume)
    }
}

/// Whether an event opens or closes an effect window
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Begin,
    End,
}

impl Boundary {
    pub fn label(&self) -> &'static str {
        match self {
            Boundary::Begin => "begin",
            Boundary::End => "end",
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Boundary::End)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A gradient change at a bucket index
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub timestamp: usize,
    pub name: String,
    /// Glucose units per bucket
    pub gradient: f64,
    pub boundary: Boundary,
}

// ============================================================================
// Output Types
// ============================================================================

/// Glucose level at the end of one time bucket
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GlucoseSample {
    pub index: usize,
    pub time: String,
    pub glucose: f64,
}

/// An event as it was applied during the sweep
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EventMarker {
    pub index: usize,
    pub time: String,
    pub name: String,
    pub status: Boundary,
    pub gradient: f64,
}

/// Result of one curve sweep
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Curve {
    pub samples: Vec<GlucoseSample>,
    pub markers: Vec<EventMarker>,
}

/// Everything a simulated day produces
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayReport {
    pub granularity_minutes: u32,
    pub glycation_threshold: f64,
    pub samples: Vec<GlucoseSample>,
    pub markers: Vec<EventMarker>,
    pub glycation_minutes: u32,
}

impl DayReport {
    /// Highest glucose reached during the day
    pub fn peak(&self) -> Option<&GlucoseSample> {
        self.samples
            .iter()
            .max_by(|a, b| a.glucose.total_cmp(&b.glucose))
    }
}
