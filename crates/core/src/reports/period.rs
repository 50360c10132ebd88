//! Calendar periods: inclusive date ranges, month buckets and report periods.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day.
    pub start: NaiveDate,
    /// Last day.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if `date` falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// One calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Calendar year.
    pub year: i32,
    /// Month number, 1-12.
    pub month: u32,
}

impl MonthBucket {
    /// Creates a bucket, validating the month.
    pub fn new(year: i32, month: u32) -> Result<Self, ReportError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ReportError::DateOutOfRange {
                year: i64::from(year),
                month,
            });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The bucket `back` months earlier.
    pub fn shifted_back(self, back: u32) -> Result<Self, ReportError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 - i64::from(back);
        let year = index.div_euclid(12);
        // rem_euclid(12) is always in 0..12
        let month = u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1;
        let year_i32 =
            i32::try_from(year).map_err(|_| ReportError::DateOutOfRange { year, month })?;
        Self::new(year_i32, month)
    }

    /// First day of the month.
    pub fn first_day(self) -> Result<NaiveDate, ReportError> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| self.out_of_range())
    }

    /// Last day of the month.
    pub fn last_day(self) -> Result<NaiveDate, ReportError> {
        self.first_day()?
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| self.out_of_range())
    }

    /// Inclusive range covering the whole month.
    pub fn range(self) -> Result<DateRange, ReportError> {
        DateRange::new(self.first_day()?, self.last_day()?)
    }

    /// Label in `YYYY-MM` form.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// The `count` months ending with the month of `anchor`, oldest first.
    pub fn trailing(anchor: NaiveDate, count: u32) -> Result<Vec<Self>, ReportError> {
        let current = Self::containing(anchor);
        (0..count)
            .rev()
            .map(|back| current.shifted_back(back))
            .collect()
    }

    fn out_of_range(self) -> ReportError {
        ReportError::DateOutOfRange {
            year: i64::from(self.year),
            month: self.month,
        }
    }
}

impl fmt::Display for MonthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Preset reporting windows relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// The current calendar month.
    #[default]
    CurrentMonth,
    /// The previous calendar month.
    LastMonth,
    /// The current month and the two before it.
    #[serde(rename = "last_3_months")]
    Last3Months,
    /// The current month and the five before it.
    #[serde(rename = "last_6_months")]
    Last6Months,
    /// January 1 to December 31 of this year.
    CurrentYear,
    /// January 1 to December 31 of last year.
    LastYear,
}

impl ReportPeriod {
    /// Every preset, in display order.
    pub const ALL: [Self; 6] = [
        Self::CurrentMonth,
        Self::LastMonth,
        Self::Last3Months,
        Self::Last6Months,
        Self::CurrentYear,
        Self::LastYear,
    ];

    /// Returns the string representation of the period.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentMonth => "current_month",
            Self::LastMonth => "last_month",
            Self::Last3Months => "last_3_months",
            Self::Last6Months => "last_6_months",
            Self::CurrentYear => "current_year",
            Self::LastYear => "last_year",
        }
    }

    /// Parses a period from its string form.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s.trim())
    }

    /// Resolves the period to an inclusive date range.
    pub fn range(&self, today: NaiveDate) -> Result<DateRange, ReportError> {
        let current = MonthBucket::containing(today);
        match self {
            Self::CurrentMonth => current.range(),
            Self::LastMonth => current.shifted_back(1)?.range(),
            Self::Last3Months => months_ending_at(current, 3),
            Self::Last6Months => months_ending_at(current, 6),
            Self::CurrentYear => year_range(today.year()),
            Self::LastYear => year_range(today.year() - 1),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn months_ending_at(last: MonthBucket, count: u32) -> Result<DateRange, ReportError> {
    let first = last.shifted_back(count - 1)?;
    DateRange::new(first.first_day()?, last.last_day()?)
}

fn year_range(year: i32) -> Result<DateRange, ReportError> {
    let first = MonthBucket::new(year, 1)?;
    let last = MonthBucket::new(year, 12)?;
    DateRange::new(first.first_day()?, last.last_day()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_range_handles_leap_february() {
        let range = MonthBucket::new(2024, 2).unwrap().range().unwrap();
        assert_eq!(range.start, date(2024, 2, 1));
        assert_eq!(range.end, date(2024, 2, 29));
        assert!(range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 3, 1)));
    }

    #[test]
    fn test_shifted_back_crosses_year() {
        let bucket = MonthBucket::new(2024, 2).unwrap().shifted_back(3).unwrap();
        assert_eq!(bucket, MonthBucket::new(2023, 11).unwrap());
        assert_eq!(bucket.label(), "2023-11");
    }

    #[test]
    fn test_trailing_is_oldest_first() {
        let labels: Vec<String> = MonthBucket::trailing(date(2024, 3, 15), 6)
            .unwrap()
            .iter()
            .map(MonthBucket::label)
            .collect();
        assert_eq!(
            labels,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
        assert!(MonthBucket::trailing(date(2024, 3, 15), 0).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            MonthBucket::new(2024, 13),
            Err(ReportError::DateOutOfRange { year: 2024, month: 13 })
        );
    }

    #[test]
    fn test_date_range_rejects_inverted() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
    }

    #[rstest]
    #[case(ReportPeriod::CurrentMonth, date(2024, 3, 1), date(2024, 3, 31))]
    #[case(ReportPeriod::LastMonth, date(2024, 2, 1), date(2024, 2, 29))]
    #[case(ReportPeriod::Last3Months, date(2024, 1, 1), date(2024, 3, 31))]
    #[case(ReportPeriod::Last6Months, date(2023, 10, 1), date(2024, 3, 31))]
    #[case(ReportPeriod::CurrentYear, date(2024, 1, 1), date(2024, 12, 31))]
    #[case(ReportPeriod::LastYear, date(2023, 1, 1), date(2023, 12, 31))]
    fn test_report_period_ranges(
        #[case] period: ReportPeriod,
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
    ) {
        let range = period.range(date(2024, 3, 15)).unwrap();
        assert_eq!(range, DateRange { start, end });
    }

    #[test]
    fn test_last_month_in_january() {
        let range = ReportPeriod::LastMonth.range(date(2025, 1, 10)).unwrap();
        assert_eq!(range.start, date(2024, 12, 1));
        assert_eq!(range.end, date(2024, 12, 31));
    }

    #[test]
    fn test_period_parse_round_trips_names() {
        for period in ReportPeriod::ALL {
            assert_eq!(ReportPeriod::parse(period.as_str()), Some(period));
        }
        assert_eq!(ReportPeriod::parse("next_year"), None);
    }
}
