//! Domain Value Objects

use chrono::NaiveDate;

/// Hours worked in one entry: finite, greater than zero, at most one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkHours(f64);

impl WorkHours {
    pub const MAX: f64 = 24.0;

    pub fn new(hours: f64) -> Option<Self> {
        if hours.is_finite() && hours > 0.0 && hours <= Self::MAX {
            Some(Self(hours))
        } else {
            None
        }
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

/// Inclusive date range; either bound may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl DateRange {
    /// `None` when `from` is after `to`
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) if from > to => None,
            _ => Some(Self { from, to }),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_work_hours_bounds() {
        assert!(WorkHours::new(0.5).is_some());
        assert!(WorkHours::new(24.0).is_some());
        assert!(WorkHours::new(0.0).is_none());
        assert!(WorkHours::new(-1.0).is_none());
        assert!(WorkHours::new(24.5).is_none());
        assert!(WorkHours::new(f64::NAN).is_none());
        assert!(WorkHours::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_date_range() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31))).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2024, 2, 1)));

        let open_end = DateRange::new(Some(date(2024, 1, 1)), None).unwrap();
        assert!(open_end.contains(date(2030, 1, 1)));
        assert!(!open_end.contains(date(2023, 12, 31)));

        assert!(DateRange::unbounded().contains(date(1999, 1, 1)));
        assert!(DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1))).is_none());
    }
}
