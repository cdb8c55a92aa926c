//! Domain Services
//!
//! Pure logic over work entries.

use chrono::Datelike;
use std::collections::HashMap;

use crate::domain::entities::WorkEntry;

/// Average hours per worked week.
///
/// Entries are bucketed per user and ISO week; the result is the mean of the
/// bucket totals. No entries gives `0.0`.
pub fn average_hours_per_week(entries: &[WorkEntry]) -> f64 {
    let mut weeks: HashMap<(&str, i32, u32), f64> = HashMap::new();

    for entry in entries {
        let week = entry.date.iso_week();
        *weeks
            .entry((entry.user_id.as_str(), week.year(), week.week()))
            .or_default() += entry.hours;
    }

    if weeks.is_empty() {
        return 0.0;
    }

    weeks.values().sum::<f64>() / weeks.len() as f64
}
