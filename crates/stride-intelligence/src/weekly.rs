// ABOUTME: Weekly distance aggregation over activity summaries
// ABOUTME: Buckets activities by Sunday-start week and totals meters and miles per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Analytics Contributors

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use stride_core::formatters::meters_to_miles;
use stride_core::models::ActivitySummary;

/// Distance totals for one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyDistance {
    /// Sunday the week starts on (UTC calendar date)
    pub week_start: NaiveDate,
    /// Summed activity distance in meters
    pub distance_meters: f64,
    /// Activities that fell in this week, in input order
    pub activity_ids: Vec<u64>,
}

impl WeeklyDistance {
    /// Weekly distance in miles, rounded to one decimal as charted
    #[must_use]
    pub fn distance_miles(&self) -> f64 {
        (meters_to_miles(self.distance_meters) * 10.0).round() / 10.0
    }
}

/// Sunday on or before `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Group activities by week, oldest week first
#[must_use]
pub fn weekly_distance(activities: &[ActivitySummary]) -> Vec<WeeklyDistance> {
    let mut weeks: BTreeMap<NaiveDate, WeeklyDistance> = BTreeMap::new();

    for activity in activities {
        let start = week_start(activity.start_date.date_naive());
        let week = weeks.entry(start).or_insert_with(|| WeeklyDistance {
            week_start: start,
            distance_meters: 0.0,
            activity_ids: Vec::new(),
        });
        week.distance_meters += activity.distance;
        week.activity_ids.push(activity.id);
    }

    weeks.into_values().collect()
}
