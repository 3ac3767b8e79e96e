#![forbid(unsafe_code)]

//! Core domain model and simulation logic for the blood glucose day simulator.
//!
//! This crate provides:
//! - Domain types (catalog items, actions, events, samples)
//! - Reference catalog loading
//! - Time bucketing
//! - Event builder and curve engine
//! - Glycation metric
//! - Day plans, export, configuration

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod timeline;
pub mod events;
pub mod curve;
pub mod glycation;
pub mod simulator;
pub mod plan;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::builtin_catalog;
pub use config::Config;
pub use timeline::{end_of_day, index_to_time, time_to_index};
pub use events::build_events;
pub use curve::{run, BASELINE_GLUCOSE};
pub use glycation::{glycation, DEFAULT_GLYCATION_THRESHOLD};
pub use simulator::{simulate_day, SimulationSettings};
pub use plan::DayPlan;
