use std::str::FromStr;

use chrono::{Datelike as _, Days, NaiveDate};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Today,
    Yesterday,
    /// Today and the six days before it.
    Last7Days,
    /// Today and the 29 days before it.
    Last30Days,
    ThisMonth,
    Custom { from: NaiveDate, to: NaiveDate },
}

impl DateRange {
    /// Inclusive bounds relative to `today`. `None` for an unbounded range.
    pub fn bounds(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            DateRange::All => None,
            DateRange::Today => Some((today, today)),
            DateRange::Yesterday => {
                let yesterday = today.pred_opt().unwrap_or(NaiveDate::MIN);
                Some((yesterday, yesterday))
            }
            DateRange::Last7Days => Some((days_back(today, 6), today)),
            DateRange::Last30Days => Some((days_back(today, 29), today)),
            DateRange::ThisMonth => Some((today.with_day(1).unwrap_or(today), today)),
            DateRange::Custom { from, to } => Some(((*from).min(*to), (*from).max(*to))),
        }
    }

    pub fn contains(&self, day: NaiveDate, today: NaiveDate) -> bool {
        match self.bounds(today) {
            Some((from, to)) => from <= day && day <= to,
            None => true,
        }
    }
}

fn days_back(today: NaiveDate, days: u64) -> NaiveDate {
    today
        .checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown date range: {0}")]
pub struct ParseRangeError(String);

impl FromStr for DateRange {
    type Err = ParseRangeError;

    /// Accepts a preset name or `YYYY-MM-DD..YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let range = match s {
            "all" => DateRange::All,
            "today" => DateRange::Today,
            "yesterday" => DateRange::Yesterday,
            "last_7_days" => DateRange::Last7Days,
            "last_30_days" => DateRange::Last30Days,
            "this_month" => DateRange::ThisMonth,
            _ => {
                let (from, to) = s
                    .split_once("..")
                    .ok_or_else(|| ParseRangeError(s.to_owned()))?;
                let parse = |value: &str| {
                    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                        .map_err(|_| ParseRangeError(s.to_owned()))
                };
                DateRange::Custom {
                    from: parse(from)?,
                    to: parse(to)?,
                }
            }
        };
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_presets() {
        let today = date(2024, 3, 15);
        assert_eq!(DateRange::All.bounds(today), None);
        assert_eq!(DateRange::Today.bounds(today), Some((today, today)));
        assert_eq!(
            DateRange::Yesterday.bounds(today),
            Some((date(2024, 3, 14), date(2024, 3, 14)))
        );
        assert_eq!(
            DateRange::Last7Days.bounds(today),
            Some((date(2024, 3, 9), today))
        );
        assert_eq!(
            DateRange::Last30Days.bounds(today),
            Some((date(2024, 2, 15), today))
        );
        assert_eq!(
            DateRange::ThisMonth.bounds(today),
            Some((date(2024, 3, 1), today))
        );
    }

    #[test]
    fn test_custom_is_normalized() {
        let range = DateRange::Custom {
            from: date(2024, 3, 10),
            to: date(2024, 3, 1),
        };
        let today = date(2024, 3, 15);
        assert_eq!(range.bounds(today), Some((date(2024, 3, 1), date(2024, 3, 10))));
        assert!(range.contains(date(2024, 3, 1), today));
        assert!(range.contains(date(2024, 3, 10), today));
        assert!(!range.contains(date(2024, 3, 11), today));
    }

    #[test]
    fn test_contains() {
        let today = date(2024, 3, 15);
        assert!(DateRange::All.contains(date(1999, 1, 1), today));
        assert!(DateRange::Last7Days.contains(date(2024, 3, 9), today));
        assert!(!DateRange::Last7Days.contains(date(2024, 3, 8), today));
        assert!(!DateRange::Today.contains(date(2024, 3, 16), today));
    }

    #[test]
    fn test_parse() {
        assert_eq!("today".parse::<DateRange>().unwrap(), DateRange::Today);
        assert_eq!(
            "last_30_days".parse::<DateRange>().unwrap(),
            DateRange::Last30Days
        );
        assert_eq!(
            "2024-01-01..2024-01-31".parse::<DateRange>().unwrap(),
            DateRange::Custom {
                from: date(2024, 1, 1),
                to: date(2024, 1, 31)
            }
        );
        assert!("week".parse::<DateRange>().is_err());
        assert!("2024-01-01..".parse::<DateRange>().is_err());
    }
}
