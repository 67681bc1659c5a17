//! RawEvent to NormalizedEvent conversion pipeline.
//!
//! This is the best-effort heart of the system: every raw record produces
//! exactly one normalized event, with any field that cannot be resolved left
//! empty rather than failing the record. Normalizing the same record twice
//! yields identical results.

use serpevents_core::{
    NormalizedEvent, extract_month_days, parse_address, parse_clock, parse_month_day,
    parse_time_range,
};

use crate::raw_event::{RawDate, RawEvent};

/// Which source wins when the free-text description and the structured
/// date fields disagree about a date range.
///
/// In the observed data the structured start/end fields are sometimes
/// inverted while the free text reads correctly, so free text wins by
/// default. That is a trust heuristic about one data source, not a law;
/// it is a policy value so a future source can flip it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Two or more month/day pairs in the free text replace the structured
    /// start/end fields entirely.
    #[default]
    PreferWhenText,
    /// Structured fields always win; free-text pairs only fill empty slots.
    PreferStructured,
}

/// Converts a raw record using the default [`RangePolicy`].
pub fn normalize_event(raw: &RawEvent) -> NormalizedEvent {
    normalize_event_with(raw, RangePolicy::default())
}

/// Converts a raw record to its normalized form. Never fails.
pub fn normalize_event_with(raw: &RawEvent, policy: RangePolicy) -> NormalizedEvent {
    let mut event = NormalizedEvent::new(&raw.title);
    event.link = raw.link.clone();

    let date = raw.date.clone().unwrap_or_default();
    event.when_raw = date.when.clone().unwrap_or_default();

    resolve_dates(&mut event, &date, policy);
    resolve_times(&mut event, &date);

    let parts = parse_address(raw.address_lines());
    event.address_line = parts.line;
    event.city = parts.city;
    event.region = parts.region;
    event.postal_code = parts.postal_code;

    event
}

/// Batch conversion, preserving order and count.
pub fn normalize_events(raw_events: &[RawEvent]) -> Vec<NormalizedEvent> {
    raw_events.iter().map(normalize_event).collect()
}

fn resolve_dates(event: &mut NormalizedEvent, date: &RawDate, policy: RangePolicy) {
    let structured_start = date.start_date.as_deref().and_then(parse_month_day);
    let structured_end = date.end_date.as_deref().and_then(parse_month_day);

    // The start month token may come from either structured field; the end
    // only from its own.
    let mut start = structured_start.or(structured_end);
    let mut end = structured_end;

    let pairs = extract_month_days(&event.when_raw);
    match policy {
        RangePolicy::PreferWhenText if pairs.len() >= 2 => {
            start = pairs.first().copied();
            end = pairs.last().copied();
        }
        _ => {
            if !pairs.is_empty() {
                start = start.or_else(|| pairs.first().copied());
                end = end.or_else(|| pairs.last().copied());
            }
        }
    }

    event.start_date = start;
    // Single-day assumption: no distinct end token means the event ends the
    // day it starts.
    event.end_date = end.or(start);
}

fn resolve_times(event: &mut NormalizedEvent, date: &RawDate) {
    let structured_start = date.start_time.as_deref().and_then(parse_clock);
    let structured_end = date.end_time.as_deref().and_then(parse_clock);

    let from_text = parse_time_range(&event.when_raw);
    event.start_time = structured_start.or(from_text.start);
    event.end_time = structured_end.or(from_text.end);
    event.time_zone = from_text.zone;
}
