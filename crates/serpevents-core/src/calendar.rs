//! iCalendar emission for normalized events.
//!
//! Every event is emitted as an all-day block, whether or not clock times
//! were resolved: `DTSTART`/`DTEND` carry `VALUE=DATE` values and the end
//! boundary is exclusive (the stated end date plus one calendar day).
//! Events whose dates cannot be resolved are omitted from the document and
//! reported back to the caller instead of failing the batch.

use chrono::NaiveDate;
use icalendar::{Calendar, Component, EventLike, Property, ValueType};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::event::NormalizedEvent;

/// Product identifier emitted in the calendar header.
pub const PROD_ID: &str = "-//serpevents//EN";

/// A four-digit year token in free text, e.g. "Nov 9, 2025".
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("invalid year regex"));

/// Options for one emission pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarOptions {
    /// Year assumed for events whose free-text description carries no
    /// four-digit year. Callers that want "now" semantics pass the current
    /// year; the emitter itself never reads the clock.
    pub reference_year: i32,
}

/// Why an event was left out of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither the start nor end date resolved to a real calendar date.
    UnresolvableDate,
}

/// An event that contributed no block to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    /// Position of the event in the input batch.
    pub index: usize,
    /// The event title, for diagnostics.
    pub title: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// The result of an emission pass.
#[derive(Debug, Clone)]
pub struct CalendarBuild {
    /// The serialized calendar document (CRLF line endings).
    pub document: String,
    /// Events omitted from the document, in input order.
    pub skipped: Vec<SkippedEvent>,
}

/// Builds the calendar document for a batch of events.
pub fn build_calendar(events: &[NormalizedEvent], options: &CalendarOptions) -> CalendarBuild {
    let mut cal = Calendar::new();
    cal.append_property(Property::new("VERSION", "2.0"));
    cal.append_property(Property::new("PRODID", PROD_ID));

    let mut skipped = Vec::new();
    for (index, event) in events.iter().enumerate() {
        let year = year_hint(&event.when_raw).unwrap_or(options.reference_year);
        let start = event.start_date.and_then(|d| d.resolve(year));
        let end = event
            .end_date
            .or(event.start_date)
            .and_then(|d| d.resolve(year));

        // The end boundary is exclusive: one day past the stated end date.
        let (Some(start), Some(end_exclusive)) = (start, end.and_then(|d| d.succ_opt())) else {
            debug!(index, title = %event.title, "no usable date, leaving event out");
            skipped.push(SkippedEvent {
                index,
                title: event.title.clone(),
                reason: SkipReason::UnresolvableDate,
            });
            continue;
        };

        cal.push(vevent(index, event, start, end_exclusive));
    }

    CalendarBuild {
        document: cal.done().to_string(),
        skipped,
    }
}

fn vevent(
    index: usize,
    event: &NormalizedEvent,
    start: NaiveDate,
    end_exclusive: NaiveDate,
) -> icalendar::Event {
    let mut block = icalendar::Event::new();
    block.uid(&format!("{}-{}@serpevents", index, uid_slug(&event.title)));
    // Pinned to the start date so repeated runs produce identical documents;
    // left alone, the component would be stamped with the current time.
    block.add_property("DTSTAMP", format!("{}T000000Z", start.format("%Y%m%d")));
    add_date_property(&mut block, "DTSTART", start);
    add_date_property(&mut block, "DTEND", end_exclusive);
    // All-day listings should not mark the subscriber as busy.
    block.add_property("TRANSP", "TRANSPARENT");
    block.summary(&escape_text(&event.title));

    let location = event.location_parts().join(", ");
    if !location.is_empty() {
        block.location(&escape_text(&location));
    }

    let mut description = Vec::new();
    if !event.when_raw.is_empty() {
        description.push(format!("When: {}", event.when_raw));
    }
    if let Some(link) = event.link.as_deref().filter(|l| !l.is_empty()) {
        description.push(format!("Link: {}", link));
    }
    if !description.is_empty() {
        block.description(&escape_text(&description.join("\\n")));
    }

    block.done()
}

/// Adds a `VALUE=DATE` property, the all-day form of DTSTART/DTEND.
fn add_date_property(block: &mut icalendar::Event, name: &str, date: NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    block.append_property(prop);
}

/// Commas are reserved in iCalendar TEXT values and must be escaped.
fn escape_text(value: &str) -> String {
    value.replace(',', "\\,")
}

/// Strips every non-alphanumeric character for use inside a UID.
fn uid_slug(title: &str) -> String {
    title.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// First 20xx token in the free-text description, if any.
fn year_hint(when_raw: &str) -> Option<i32> {
    YEAR_RE.captures(when_raw).and_then(|caps| caps[1].parse().ok())
}
