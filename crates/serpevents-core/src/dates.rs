//! Date and time extraction from loosely formatted source text.
//!
//! Source records describe dates in inconsistent shapes: structured
//! month/day tokens (`"Nov 9"`, possibly inverted across start/end), free
//! text (`"Sat, Nov 9, 6 – 9 PM CST"`), sometimes in Spanish
//! (`"15 de ago"`). Everything here is best-effort: unparseable input yields
//! `None` or an empty result, never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::event::{ClockTime, MonthDay};
use crate::locale;

/// One or two clock times lifted from free text, with the timezone
/// abbreviation that trailed them, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// The first (or only) clock time.
    pub start: Option<ClockTime>,
    /// The second clock time. A lone time leaves this empty.
    pub end: Option<ClockTime>,
    /// US timezone abbreviation, e.g. `"CST"`.
    pub zone: Option<String>,
}

/// Two 12-hour expressions separated by a dash or en/em dash, each with
/// optional minutes and AM/PM marker, optionally trailed by a US timezone
/// abbreviation. Matches without any marker are discarded by the caller so
/// that day spans like "Nov 9 - 11" are not mistaken for clock ranges.
static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d{1,2})(?::([0-5]\d))?\s*((?i:AM|PM))?\s*[-–—]\s*(\d{1,2})(?::([0-5]\d))?\s*((?i:AM|PM))?(?:\s+(CST|CDT|EST|EDT|PST|PDT|MST|MDT))?",
    )
    .expect("invalid time range regex")
});

/// A single 12-hour expression; here the AM/PM marker is mandatory.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})(?::([0-5]\d))?\s*((?i:AM|PM))(?:\s+(CST|CDT|EST|EDT|PST|PDT|MST|MDT))?")
        .expect("invalid time regex")
});

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

fn parse_day(token: &str) -> Option<u32> {
    token.parse().ok().filter(|day| (1..=31).contains(day))
}

/// Finds the first month token and pairs it with the next day-like integer.
///
/// The scan stops at the first month match whether or not a day follows, so
/// `"Nov"` alone yields a month with no day. Tokens that are not a day in
/// 1..=31 (weekday names, year numbers) are skipped over.
pub fn parse_month_day(text: &str) -> Option<MonthDay> {
    let toks: Vec<&str> = tokens(text).collect();
    let (index, month) = toks
        .iter()
        .enumerate()
        .find_map(|(i, tok)| locale::month_for_token(tok).map(|month| (i, month)))?;
    let day = toks[index + 1..].iter().find_map(|tok| parse_day(tok));
    Some(MonthDay { month, day })
}

/// Collects every month/day pair in order of appearance.
///
/// Unlike [`parse_month_day`], the day lookahead for each pair stops at the
/// next month token, so in `"Nov - Dec 5"` the 5 belongs to December only.
pub fn extract_month_days(text: &str) -> Vec<MonthDay> {
    let toks: Vec<&str> = tokens(text).collect();
    let mut pairs = Vec::new();
    for (index, tok) in toks.iter().enumerate() {
        let Some(month) = locale::month_for_token(tok) else {
            continue;
        };
        let day = toks[index + 1..]
            .iter()
            .take_while(|next| locale::month_for_token(next).is_none())
            .find_map(|next| parse_day(next));
        pairs.push(MonthDay { month, day });
    }
    pairs
}

/// Parses a structured time field such as `"6:00 PM"` or `"6 PM"`.
pub fn parse_clock(text: &str) -> Option<ClockTime> {
    let caps = TIME_RE.captures(text)?;
    clock_from_caps(&caps, 1, 2, caps.get(3).map(|m| m.as_str()))
}

/// Lifts one or two clock times out of a free-text date description.
///
/// A dash-separated pair is preferred; a side without its own AM/PM marker
/// inherits the other side's, so `"6 – 9 PM"` reads as 6 PM through 9 PM.
/// When no pair carries a marker, a single marked time is accepted as the
/// start with no end.
pub fn parse_time_range(text: &str) -> TimeRange {
    for caps in TIME_RANGE_RE.captures_iter(text) {
        let start_meridiem = caps.get(3).map(|m| m.as_str());
        let end_meridiem = caps.get(6).map(|m| m.as_str());
        if start_meridiem.is_none() && end_meridiem.is_none() {
            continue;
        }
        let start = clock_from_caps(&caps, 1, 2, start_meridiem.or(end_meridiem));
        let end = clock_from_caps(&caps, 4, 5, end_meridiem.or(start_meridiem));
        if start.is_none() && end.is_none() {
            continue;
        }
        return TimeRange {
            start,
            end,
            zone: caps.get(7).map(|m| m.as_str().to_string()),
        };
    }

    if let Some(caps) = TIME_RE.captures(text) {
        return TimeRange {
            start: clock_from_caps(&caps, 1, 2, caps.get(3).map(|m| m.as_str())),
            end: None,
            zone: caps.get(4).map(|m| m.as_str().to_string()),
        };
    }

    TimeRange::default()
}

fn clock_from_caps(
    caps: &regex::Captures<'_>,
    hour_group: usize,
    minute_group: usize,
    meridiem: Option<&str>,
) -> Option<ClockTime> {
    let hour: u32 = caps.get(hour_group)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(minute_group) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let pm = meridiem?.eq_ignore_ascii_case("pm");
    ClockTime::from_12h(hour, minute, pm)
}
