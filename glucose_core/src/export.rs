//! Exporting simulated days.
//!
//! The glucose series and the event markers are written as separate CSV
//! files; the whole report can also be rendered as JSON.

use crate::{DayReport, EventMarker, GlucoseSample, Result};
use std::path::Path;

/// A row in the series CSV
#[derive(Debug, serde::Serialize)]
struct SampleRow<'a> {
    index: usize,
    time: &'a str,
    glucose: f64,
}

impl<'a> From<&'a GlucoseSample> for SampleRow<'a> {
    fn from(sample: &'a GlucoseSample) -> Self {
        SampleRow {
            index: sample.index,
            time: &sample.time,
            glucose: sample.glucose,
        }
    }
}

/// A row in the markers CSV
#[derive(Debug, serde::Serialize)]
struct MarkerRow<'a> {
    index: usize,
    time: &'a str,
    name: &'a str,
    status: &'static str,
    gradient: f64,
}

impl<'a> From<&'a EventMarker> for MarkerRow<'a> {
    fn from(marker: &'a EventMarker) -> Self {
        MarkerRow {
            index: marker.index,
            time: &marker.time,
            name: &marker.name,
            status: marker.status.label(),
            gradient: marker.gradient,
        }
    }
}

/// Write the glucose series to a CSV file, replacing any existing file
pub fn write_samples_csv(report: &DayReport, path: &Path) -> Result<usize> {
    write_rows(path, report.samples.iter().map(SampleRow::from))
}

/// Write the event markers to a CSV file, replacing any existing file
pub fn write_markers_csv(report: &DayReport, path: &Path) -> Result<usize> {
    write_rows(path, report.markers.iter().map(MarkerRow::from))
}

/// Render the whole report as pretty-printed JSON
pub fn to_json(report: &DayReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn write_rows<T, I>(path: &Path, rows: I) -> Result<usize>
where
    T: serde::Serialize,
    I: IntoIterator<Item = T>,
{
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    let mut count = 0;
    for row in rows {
        writer.serialize(row)?;
        count += 1;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to {:?}", count, path);
    Ok(count)
}
