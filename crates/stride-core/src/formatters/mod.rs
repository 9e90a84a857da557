// ABOUTME: Presentation helpers turning rates, durations, and distances into display strings
// ABOUTME: Pace per kilometer and per mile, clock-style durations, and kilometer/mile distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

//! # Formatters
//!
//! Pure functions with no state. Every function accepts any `f64` and never
//! panics; unusable inputs map to a fixed placeholder string.

use crate::constants::units::{
    METERS_PER_KM, METERS_PER_MILE, MILES_PER_METER, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};

/// Placeholder shown when a pace cannot be computed
pub const PACE_PLACEHOLDER: &str = "--:--";

/// Convert a speed in m/s to a pace per kilometer, `"M:SS"`.
///
/// Minutes and seconds are both floored. A zero (or negative, or non-finite)
/// rate yields [`PACE_PLACEHOLDER`].
///
/// ```
/// use stride_core::formatters::pace_from_rate;
///
/// assert_eq!(pace_from_rate(0.0), "--:--");
/// assert_eq!(pace_from_rate(1000.0 / 180.0), "3:00");
/// ```
#[must_use]
pub fn pace_from_rate(meters_per_second: f64) -> String {
    if !meters_per_second.is_finite() || meters_per_second <= 0.0 {
        return PACE_PLACEHOLDER.to_owned();
    }

    let seconds_per_km = METERS_PER_KM / meters_per_second;
    let minutes = (seconds_per_km / SECONDS_PER_MINUTE).floor() as u64;
    let seconds = (seconds_per_km % SECONDS_PER_MINUTE).floor() as u64;
    format!("{minutes}:{seconds:02}")
}

/// Convert a speed in m/s to a pace per mile, `"M:SS"`.
///
/// Seconds are rounded, and a zero rate yields `"0:00"`.
#[must_use]
pub fn pace_per_mile(meters_per_second: f64) -> String {
    if !meters_per_second.is_finite() || meters_per_second <= 0.0 {
        return "0:00".to_owned();
    }

    let minutes_per_mile = METERS_PER_MILE / (meters_per_second * SECONDS_PER_MINUTE);
    let mut minutes = minutes_per_mile.floor() as u64;
    let mut seconds = ((minutes_per_mile - minutes_per_mile.floor()) * SECONDS_PER_MINUTE).round()
        as u64;
    // 59.6 rounds up into the next minute
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }
    format!("{minutes}:{seconds:02}")
}

/// Format a duration in seconds as `"1h 02m 03s"`, or `"2m 03s"` under an hour.
///
/// Fractional seconds are floored; negative or non-finite input yields `"0m 00s"`.
#[must_use]
pub fn duration_to_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {secs:02}s")
    } else {
        format!("{minutes}m {secs:02}s")
    }
}

/// Format meters as kilometers with two decimals, `"5.00 km"`
#[must_use]
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.2} km", meters / METERS_PER_KM)
}

/// Convert meters to statute miles
#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters * MILES_PER_METER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_zero_rate_placeholder() {
        assert_eq!(pace_from_rate(0.0), PACE_PLACEHOLDER);
        assert_eq!(pace_from_rate(-1.0), PACE_PLACEHOLDER);
        assert_eq!(pace_from_rate(f64::NAN), PACE_PLACEHOLDER);
    }

    #[test]
    fn test_pace_pads_seconds() {
        // 2.5 m/s = 400 s/km
        assert_eq!(pace_from_rate(2.5), "6:40");
        // 4 m/s = 250 s/km
        assert_eq!(pace_from_rate(4.0), "4:10");
        // 1000/605 s/km: seconds must be zero padded
        assert_eq!(pace_from_rate(1000.0 / 605.0), "10:05");
    }

    #[test]
    fn test_duration_under_and_over_an_hour() {
        assert_eq!(duration_to_clock(0.0), "0m 00s");
        assert_eq!(duration_to_clock(125.9), "2m 05s");
        assert_eq!(duration_to_clock(3723.0), "1h 02m 03s");
        assert_eq!(duration_to_clock(-10.0), "0m 00s");
    }
}
