//! Event types for normalized search-result events.
//!
//! This module provides the core types produced by normalization:
//! - [`Month`]: one of the twelve canonical month tokens
//! - [`MonthDay`]: a month/day pair without a year
//! - [`ClockTime`]: a 24-hour clock time
//! - [`NormalizedEvent`]: the canonical event shape consumed by the CSV and
//!   calendar emitters

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar month, identified by its canonical three-letter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Returns the canonical uppercase three-letter token.
    pub fn token(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Returns the month number, 1 through 12.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Returns the month for a 1-based month number.
    pub fn from_number(number: u32) -> Option<Month> {
        Month::ALL.get(number.checked_sub(1)? as usize).copied()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A month/day pair without a year.
///
/// The day may be absent when source text named a month but no usable day
/// token. The year is supplied later, at emission time, from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    /// The month.
    pub month: Month,
    /// The day of month, 1 through 31, when one was found.
    pub day: Option<u32>,
}

impl MonthDay {
    /// Creates a month/day pair.
    pub fn new(month: Month, day: u32) -> Self {
        Self {
            month,
            day: Some(day),
        }
    }

    /// Creates a pair with a month but no day.
    pub fn month_only(month: Month) -> Self {
        Self { month, day: None }
    }

    /// Resolves to a concrete calendar date in the given year.
    ///
    /// Returns `None` when the day is absent or the triple does not name a
    /// real date (e.g. FEB 30).
    pub fn resolve(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month.number(), self.day?)
    }

    /// Display form for the tabular export, e.g. `"NOV 9"` (or `"NOV"` when
    /// no day is known).
    pub fn display(&self) -> String {
        match self.day {
            Some(day) => format!("{} {}", self.month.token(), day),
            None => self.month.token().to_string(),
        }
    }
}

/// A clock time in 24-hour form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour, 0 through 23.
    pub hour: u32,
    /// Minute, 0 through 59.
    pub minute: u32,
}

impl ClockTime {
    /// Creates a clock time, validating both fields.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }

    /// Converts a 12-hour clock reading to 24-hour form.
    ///
    /// 12 AM maps to hour 0, 12 PM stays 12, and PM hours below 12 gain 12.
    /// Hours outside 1 through 12 are rejected.
    pub fn from_12h(hour: u32, minute: u32, pm: bool) -> Option<Self> {
        if !(1..=12).contains(&hour) {
            return None;
        }
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        Self::new(hour, minute)
    }

    /// Display form in 12-hour notation, e.g. `"6:00 PM"`.
    pub fn display_12h(&self) -> String {
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute, meridiem)
    }
}

/// A normalized event produced from one raw search-result record.
///
/// Every field degrades independently: unresolvable parts are left empty
/// rather than failing the whole record. An event has no identity beyond its
/// position in the batch it was normalized with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedEvent {
    /// The event title, verbatim.
    pub title: String,
    /// Start date, when a month token was resolvable.
    pub start_date: Option<MonthDay>,
    /// End date; equals `start_date` when no distinct end token was found.
    pub end_date: Option<MonthDay>,
    /// Start clock time, already in 24-hour form.
    pub start_time: Option<ClockTime>,
    /// End clock time. A lone start time leaves this empty.
    pub end_time: Option<ClockTime>,
    /// US timezone abbreviation captured next to the clock times, if any.
    pub time_zone: Option<String>,
    /// The original free-text date description, preserved verbatim.
    pub when_raw: String,
    /// First line of the source address, or empty.
    pub address_line: String,
    /// Segment before the region token, or empty. May itself contain a
    /// comma-joined secondary address line.
    pub city: String,
    /// Two-letter region token, or empty.
    pub region: String,
    /// Five-digit postal code, or empty.
    pub postal_code: String,
    /// Link back to the source listing.
    pub link: Option<String>,
}

impl NormalizedEvent {
    /// Creates an empty event with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns true when no clock times were resolved.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    /// The non-empty address components used for a display location, in
    /// line/city/region order.
    pub fn location_parts(&self) -> Vec<&str> {
        [
            self.address_line.as_str(),
            self.city.as_str(),
            self.region.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod month {
        use super::*;

        #[test]
        fn tokens_and_numbers() {
            assert_eq!(Month::Jan.token(), "JAN");
            assert_eq!(Month::Dec.token(), "DEC");
            assert_eq!(Month::Jan.number(), 1);
            assert_eq!(Month::Dec.number(), 12);
        }

        #[test]
        fn from_number_roundtrip() {
            for month in Month::ALL {
                assert_eq!(Month::from_number(month.number()), Some(month));
            }
            assert_eq!(Month::from_number(0), None);
            assert_eq!(Month::from_number(13), None);
        }

        #[test]
        fn display_uses_token() {
            assert_eq!(Month::Aug.to_string(), "AUG");
        }
    }

    mod month_day {
        use super::*;

        #[test]
        fn resolves_valid_dates() {
            let md = MonthDay::new(Month::Nov, 9);
            assert_eq!(md.resolve(2024), NaiveDate::from_ymd_opt(2024, 11, 9));
        }

        #[test]
        fn rejects_impossible_dates() {
            assert_eq!(MonthDay::new(Month::Feb, 30).resolve(2024), None);
            // Feb 29 exists only in leap years.
            assert!(MonthDay::new(Month::Feb, 29).resolve(2024).is_some());
            assert_eq!(MonthDay::new(Month::Feb, 29).resolve(2025), None);
        }

        #[test]
        fn day_is_required_to_resolve() {
            assert_eq!(MonthDay::month_only(Month::Nov).resolve(2024), None);
        }

        #[test]
        fn display_forms() {
            assert_eq!(MonthDay::new(Month::Nov, 9).display(), "NOV 9");
            assert_eq!(MonthDay::month_only(Month::Nov).display(), "NOV");
        }
    }

    mod clock_time {
        use super::*;

        #[test]
        fn validates_ranges() {
            assert!(ClockTime::new(23, 59).is_some());
            assert!(ClockTime::new(24, 0).is_none());
            assert!(ClockTime::new(12, 60).is_none());
        }

        #[test]
        fn twelve_hour_conversion() {
            assert_eq!(ClockTime::from_12h(12, 0, false), ClockTime::new(0, 0));
            assert_eq!(ClockTime::from_12h(12, 0, true), ClockTime::new(12, 0));
            assert_eq!(ClockTime::from_12h(6, 0, true), ClockTime::new(18, 0));
            assert_eq!(ClockTime::from_12h(6, 30, false), ClockTime::new(6, 30));
            assert_eq!(ClockTime::from_12h(13, 0, true), None);
            assert_eq!(ClockTime::from_12h(0, 0, false), None);
        }

        #[test]
        fn twelve_hour_display() {
            assert_eq!(ClockTime { hour: 18, minute: 0 }.display_12h(), "6:00 PM");
            assert_eq!(ClockTime { hour: 0, minute: 5 }.display_12h(), "12:05 AM");
            assert_eq!(ClockTime { hour: 12, minute: 0 }.display_12h(), "12:00 PM");
        }
    }

    mod normalized_event {
        use super::*;

        #[test]
        fn location_parts_skips_empty_components() {
            let mut event = NormalizedEvent::new("Fall Market");
            assert!(event.location_parts().is_empty());

            event.city = "Boerne".to_string();
            event.region = "TX".to_string();
            assert_eq!(event.location_parts(), vec!["Boerne", "TX"]);
        }

        #[test]
        fn all_day_when_no_times() {
            let mut event = NormalizedEvent::new("Fall Market");
            assert!(event.is_all_day());
            event.start_time = ClockTime::new(18, 0);
            assert!(!event.is_all_day());
        }

        #[test]
        fn serde_roundtrip() {
            let mut event = NormalizedEvent::new("Fall Market");
            event.start_date = Some(MonthDay::new(Month::Nov, 9));
            event.start_time = ClockTime::new(18, 0);
            event.when_raw = "Sat, Nov 9, 6 – 9 PM CST".to_string();

            let json = serde_json::to_string(&event).unwrap();
            let parsed: NormalizedEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
