use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use serde::Serialize;

use crate::domain::errors::ValidationError;

/// Default monthly target, in S$.
pub const DEFAULT_MONTHLY_TARGET: f64 = 600_000.0;
/// Default actual pace as a fraction of target pace.
pub const DEFAULT_ACTUAL_FACTOR: f64 = 0.78;

/// Value Object - a valid Gregorian calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// `month` is 1-based.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ValidationError::InvalidDate { year, month, day })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Day before the first of the following month.
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = match self.0.month() {
            12 => (self.0.year() + 1, 1),
            m => (self.0.year(), m + 1),
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|first| first.pred_opt())
            // only December of the last representable year has no successor month
            .map_or(31, |last| last.day())
    }

    /// `YYYY-MM`
    pub fn month_label(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// `19 October 2026`, what `en-SG` gives for a long date.
    pub fn long_label(&self) -> String {
        self.0.format("%-d %B %Y").to_string()
    }
}

/// Value Object - monthly revenue target (currency units)
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize)]
pub struct MonthlyTarget(f64);

impl MonthlyTarget {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidTarget(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for MonthlyTarget {
    fn default() -> Self {
        Self(DEFAULT_MONTHLY_TARGET)
    }
}

/// Value Object - actual pace relative to target pace, in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Display, Serialize)]
pub struct ActualFactor(f64);

impl ActualFactor {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidFactor(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ActualFactor {
    fn default() -> Self {
        Self(DEFAULT_ACTUAL_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_impossible_dates() {
        assert!(CalendarDate::new(2026, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2026, 13, 1).is_err());
        assert!(CalendarDate::new(2026, 4, 0).is_err());
        assert!(CalendarDate::new(2026, 4, 31).is_err());
    }

    #[test]
    fn date_display_and_labels() {
        let date = CalendarDate::new(2026, 10, 19).unwrap();
        assert_eq!(date.to_string(), "2026-10-19");
        assert_eq!(date.month_label(), "2026-10");
        assert_eq!(date.long_label(), "19 October 2026");
        assert_eq!(date.days_in_month(), 31);
        assert_eq!(CalendarDate::new(2026, 3, 5).unwrap().long_label(), "5 March 2026");
    }

    #[test]
    fn february_follows_leap_years() {
        let days = |year| CalendarDate::new(year, 2, 1).unwrap().days_in_month();
        assert_eq!(days(2024), 29);
        assert_eq!(days(2000), 29);
        assert_eq!(days(2026), 28);
        assert_eq!(days(2100), 28);
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(CalendarDate::new(2026, 12, 31).unwrap().days_in_month(), 31);
        assert_eq!(CalendarDate::new(2026, 11, 30).unwrap().days_in_month(), 30);
    }

    #[test]
    fn factor_bounds() {
        assert!(ActualFactor::new(1.0).is_ok());
        assert!(ActualFactor::new(0.78).is_ok());
        assert_eq!(ActualFactor::new(0.0), Err(ValidationError::InvalidFactor(0.0)));
        assert!(ActualFactor::new(1.01).is_err());
        assert!(ActualFactor::new(f64::NAN).is_err());
    }

    #[test]
    fn target_must_be_positive() {
        assert!(MonthlyTarget::new(600_000.0).is_ok());
        assert!(MonthlyTarget::new(-1.0).is_err());
        assert!(MonthlyTarget::new(f64::INFINITY).is_err());
    }
}
