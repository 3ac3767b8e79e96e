//! Time bucketing.
//!
//! A day is split into fixed-width buckets of `granularity` minutes. Bucket
//! `i` covers `[i * granularity, (i + 1) * granularity)` minutes after
//! midnight. Converting a clock time to a bucket floors, so the mapping is
//! lossy unless the minute value is a multiple of the granularity.

use crate::{Error, Result};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Reject bucket widths that are zero or wider than a day
pub fn check_granularity(granularity: u32) -> Result<()> {
    if granularity == 0 || granularity > MINUTES_PER_DAY {
        return Err(Error::InvalidGranularity(granularity));
    }
    Ok(())
}

/// Converts an "HH:MM" clock time to its bucket index.
///
/// For example `"01:43"` at 30-minute granularity is bucket 3, since the
/// buckets are `[00:00-00:30, 00:30-01:00, 01:00-01:30, 01:30-02:00]`.
/// `"24:00"` is accepted as the end-of-day sentinel.
pub fn time_to_index(clock: &str, granularity: u32) -> Result<usize> {
    check_granularity(granularity)?;
    let minutes = parse_minutes(clock)?;
    Ok((minutes / granularity) as usize)
}

/// Converts a bucket index back to an "HH:MM" clock time.
pub fn index_to_time(index: usize, granularity: u32) -> String {
    let minutes = index.saturating_mul(granularity as usize);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Number of buckets in a day, i.e. the index of "24:00"
pub fn end_of_day(granularity: u32) -> Result<usize> {
    time_to_index("24:00", granularity)
}

fn parse_minutes(clock: &str) -> Result<u32> {
    let invalid = || Error::InvalidTimeFormat(clock.to_string());

    let (hh, mm) = clock.split_once(':').ok_or_else(invalid)?;
    if hh.is_empty() || mm.is_empty() {
        return Err(invalid());
    }
    // u32::from_str accepts a leading '+', plain digits only here
    if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let hours: u32 = hh.parse().map_err(|_| invalid())?;
    let minutes: u32 = mm.parse().map_err(|_| invalid())?;

    if minutes >= 60 {
        return Err(invalid());
    }
    if hours > 24 || (hours == 24 && minutes != 0) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}
