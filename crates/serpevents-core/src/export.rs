//! Tabular (CSV) export of normalized events.
//!
//! One row per event in input order, with a fixed header. Field escaping is
//! the usual doubled-quote convention: values containing a comma, quote, or
//! newline are wrapped in quotes with inner quotes doubled.

use crate::event::{ClockTime, NormalizedEvent};

/// Export columns, in emission order.
pub const CSV_COLUMNS: [&str; 12] = [
    "idx",
    "title",
    "start_date",
    "start_time",
    "end_date",
    "end_time",
    "when",
    "address",
    "city",
    "region",
    "postal_code",
    "link",
];

/// Escapes a single field for CSV output.
pub fn escape_field(value: &str) -> String {
    if value.contains(['"', ',', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Reverses [`escape_field`].
pub fn unescape_field(value: &str) -> String {
    match value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => value.to_string(),
    }
}

/// The header row.
pub fn csv_header() -> String {
    CSV_COLUMNS.join(",")
}

/// Renders one event as a CSV row. `index` is the 0-based position in the
/// batch; the emitted `idx` column is 1-based.
pub fn csv_row(index: usize, event: &NormalizedEvent) -> String {
    let zone = event.time_zone.as_deref();
    let fields = [
        (index + 1).to_string(),
        event.title.clone(),
        event
            .start_date
            .map(|d| d.display())
            .unwrap_or_default(),
        time_display(event.start_time.as_ref(), zone),
        event.end_date.map(|d| d.display()).unwrap_or_default(),
        time_display(event.end_time.as_ref(), zone),
        event.when_raw.clone(),
        event.address_line.clone(),
        event.city.clone(),
        event.region.clone(),
        event.postal_code.clone(),
        event.link.clone().unwrap_or_default(),
    ];
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders a whole batch: header plus one row per event.
pub fn to_csv(events: &[NormalizedEvent]) -> String {
    let mut rows = Vec::with_capacity(events.len() + 1);
    rows.push(csv_header());
    for (index, event) in events.iter().enumerate() {
        rows.push(csv_row(index, event));
    }
    rows.join("\n")
}

fn time_display(time: Option<&ClockTime>, zone: Option<&str>) -> String {
    match (time, zone) {
        (Some(time), Some(zone)) => format!("{} {}", time.display_12h(), zone),
        (Some(time), None) => time.display_12h(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Month, MonthDay};

    fn sample_event() -> NormalizedEvent {
        let mut event = NormalizedEvent::new("Fall Market");
        event.start_date = Some(MonthDay::new(Month::Nov, 9));
        event.end_date = Some(MonthDay::new(Month::Nov, 9));
        event.start_time = ClockTime::new(18, 0);
        event.end_time = ClockTime::new(21, 0);
        event.time_zone = Some("CST".to_string());
        event.when_raw = "Sat, Nov 9, 6 – 9 PM CST".to_string();
        event.address_line = "123 Main St".to_string();
        event.city = "Boerne".to_string();
        event.region = "TX".to_string();
        event.postal_code = "78006".to_string();
        event.link = Some("https://example.com/fall-market".to_string());
        event
    }

    mod escaping {
        use super::*;

        #[test]
        fn plain_values_pass_through() {
            assert_eq!(escape_field("Fall Market"), "Fall Market");
        }

        #[test]
        fn commas_quotes_and_newlines_are_wrapped() {
            assert_eq!(escape_field("a,b"), "\"a,b\"");
            assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
            assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        }

        #[test]
        fn roundtrip_is_lossless() {
            for value in [
                "plain",
                "comma, inside",
                "quote \" inside",
                "both, \"of\" them",
                "line\nbreak",
                "",
            ] {
                assert_eq!(unescape_field(&escape_field(value)), value);
            }
        }
    }

    mod rows {
        use super::*;

        #[test]
        fn row_contains_all_fields_in_order() {
            let row = csv_row(0, &sample_event());
            assert_eq!(
                row,
                "1,Fall Market,NOV 9,6:00 PM CST,NOV 9,9:00 PM CST,\
                 \"Sat, Nov 9, 6 – 9 PM CST\",123 Main St,Boerne,TX,78006,\
                 https://example.com/fall-market"
            );
        }

        #[test]
        fn unresolved_fields_stay_empty() {
            let event = NormalizedEvent::new("Mystery");
            let row = csv_row(4, &event);
            assert_eq!(row, "5,Mystery,,,,,,,,,,");
        }

        #[test]
        fn zone_is_omitted_when_unknown() {
            let mut event = sample_event();
            event.time_zone = None;
            let row = csv_row(0, &event);
            assert!(row.contains(",6:00 PM,"));
        }

        #[test]
        fn batch_has_header_and_one_row_per_event() {
            let events = vec![sample_event(), NormalizedEvent::new("Second")];
            let csv = to_csv(&events);
            let lines: Vec<&str> = csv.lines().collect();
            assert_eq!(lines.len(), 3);
            assert_eq!(lines[0], csv_header());
            assert!(lines[1].starts_with("1,"));
            assert!(lines[2].starts_with("2,Second"));
        }
    }
}
