use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

/// A calendar month without a day component.
///
/// Ordering is year-major, month-minor; two values with equal fields are the
/// same month. Arithmetic works on the total-month encoding
/// (`year * 12 + month - 1`), so overflow of the month component carries into
/// the year.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MonthDate {
    pub month: u32,
    pub year: i32,
}

impl MonthDate {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// The current calendar month in local time. Used by the CLI and the
    /// example generator only; the prediction core never consults ambient
    /// time.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    /// Adds whole months, carrying overflow into the year. Zero is a no-op;
    /// negative offsets are unrepresentable by construction.
    pub fn add_months(self, months: u32) -> Self {
        let total = self.total_months() + months as i64;
        Self {
            month: total.rem_euclid(12) as u32 + 1,
            year: total.div_euclid(12) as i32,
        }
    }

    /// Yields exactly `count` consecutive months, starting at and including
    /// `start`.
    pub fn range(start: MonthDate, count: u32) -> impl Iterator<Item = MonthDate> {
        (0..count).map(move |offset| start.add_months(offset))
    }

    fn total_months(self) -> i64 {
        self.year as i64 * 12 + self.month as i64 - 1
    }

    pub fn label(self) -> String {
        format!("{} {}", month_label(self.month), self.year)
    }
}

impl Ord for MonthDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.month.cmp(&other.month))
    }
}

impl PartialOrd for MonthDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_year_major_month_minor() {
        let dec_2024 = MonthDate::new(12, 2024);
        let jan_2025 = MonthDate::new(1, 2025);
        let feb_2025 = MonthDate::new(2, 2025);
        assert!(dec_2024 < jan_2025);
        assert!(jan_2025 < feb_2025);
        assert_eq!(jan_2025, MonthDate::new(1, 2025));
    }

    #[test]
    fn add_months_carries_into_year() {
        let nov = MonthDate::new(11, 2024);
        assert_eq!(nov.add_months(1), MonthDate::new(12, 2024));
        assert_eq!(nov.add_months(2), MonthDate::new(1, 2025));
        assert_eq!(nov.add_months(14), MonthDate::new(1, 2026));
    }

    #[test]
    fn add_zero_months_is_a_no_op() {
        let month = MonthDate::new(6, 2025);
        assert_eq!(month.add_months(0), month);
    }

    #[test]
    fn range_includes_start_and_counts_exactly() {
        let months: Vec<_> = MonthDate::range(MonthDate::new(11, 2024), 4).collect();
        assert_eq!(
            months,
            vec![
                MonthDate::new(11, 2024),
                MonthDate::new(12, 2024),
                MonthDate::new(1, 2025),
                MonthDate::new(2, 2025),
            ]
        );
    }

    #[test]
    fn range_of_zero_is_empty() {
        assert_eq!(MonthDate::range(MonthDate::new(1, 2025), 0).count(), 0);
    }

    #[test]
    fn serializes_as_month_and_year() {
        let json = serde_json::to_string(&MonthDate::new(3, 2025)).unwrap();
        assert_eq!(json, r#"{"month":3,"year":2025}"#);
    }

    #[test]
    fn labels_month_name() {
        assert_eq!(MonthDate::new(3, 2025).label(), "Mar 2025");
        assert_eq!(MonthDate::new(3, 2025).to_string(), "2025-03");
    }
}
