//! Raw event records from the search provider.
//!
//! These are the `events_results` entries of a SerpApi `google_events`
//! response, kept as close to the wire shape as possible. Everything beyond
//! the title is optional and inconsistently populated; the normalization
//! pipeline turns these into [`serpevents_core::NormalizedEvent`].

use serde::{Deserialize, Serialize};

/// One raw event record as returned by the search provider.
///
/// Unknown response fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    /// The event title.
    pub title: String,

    /// The loosely structured date descriptor.
    pub date: Option<RawDate>,

    /// Address lines, when the listing carries them. The provider sends
    /// either a single string or a list of lines.
    pub address: Option<RawAddress>,

    /// Venue details; its address is the fallback when `address` is absent.
    pub venue: Option<RawVenue>,

    /// Link back to the source listing.
    pub link: Option<String>,
}

impl RawEvent {
    /// The address lines to decompose: the `address` field when present,
    /// else the venue-level address, else nothing.
    pub fn address_lines(&self) -> &[String] {
        if let Some(address) = &self.address {
            return address.lines();
        }
        if let Some(venue_address) = self.venue.as_ref().and_then(|v| v.address.as_ref()) {
            return std::slice::from_ref(venue_address);
        }
        &[]
    }
}

/// The date descriptor of a raw event.
///
/// `when` is a free-text description such as `"Sat, Nov 9, 6 – 9 PM CST"`;
/// the remaining fields are loosely formatted month/day and clock tokens
/// that may be missing or inverted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDate {
    /// Free-text date description.
    pub when: Option<String>,
    /// Loose start date token, e.g. `"Nov 9"`.
    pub start_date: Option<String>,
    /// Loose end date token.
    pub end_date: Option<String>,
    /// Loose start time token, e.g. `"6:00 PM"`.
    pub start_time: Option<String>,
    /// Loose end time token.
    pub end_time: Option<String>,
}

/// An address field that arrives as one string or a list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAddress {
    /// A single address line.
    Line(String),
    /// A structured address block, one element per line.
    Lines(Vec<String>),
}

impl RawAddress {
    /// The address as a list of lines, whatever shape it arrived in.
    pub fn lines(&self) -> &[String] {
        match self {
            RawAddress::Line(line) => std::slice::from_ref(line),
            RawAddress::Lines(lines) => lines,
        }
    }
}

/// Venue details attached to a raw event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawVenue {
    /// The venue name.
    pub name: Option<String>,
    /// A single-line venue address.
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_address_as_list() {
        let json = r#"{
            "title": "Fall Market",
            "date": {
                "start_date": "Nov 9",
                "when": "Sat, Nov 9, 6 – 9 PM CST"
            },
            "address": ["123 Main St", "Boerne, TX 78006"],
            "link": "https://example.com/fall-market"
        }"#;

        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Fall Market");
        assert_eq!(
            event.address_lines(),
            ["123 Main St".to_string(), "Boerne, TX 78006".to_string()]
        );
        let date = event.date.unwrap();
        assert_eq!(date.start_date.as_deref(), Some("Nov 9"));
        assert_eq!(date.when.as_deref(), Some("Sat, Nov 9, 6 – 9 PM CST"));
    }

    #[test]
    fn parses_address_as_single_string() {
        let json = r#"{"title": "Concert", "address": "Main Plaza, Boerne, TX"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.address_lines(), ["Main Plaza, Boerne, TX".to_string()]);
    }

    #[test]
    fn falls_back_to_venue_address() {
        let json = r#"{"title": "Concert", "venue": {"name": "The Hall", "address": "Boerne, TX"}}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.address_lines(), ["Boerne, TX".to_string()]);
    }

    #[test]
    fn no_address_anywhere() {
        let json = r#"{"title": "Concert"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert!(event.address_lines().is_empty());
    }

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "title": "Concert",
            "thumbnail": "https://example.com/t.jpg",
            "event_location_map": {"image": "x"}
        }"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Concert");
    }

    #[test]
    fn serde_roundtrip() {
        let event = RawEvent {
            title: "Fall Market".to_string(),
            date: Some(RawDate {
                when: Some("Sat, Nov 9".to_string()),
                start_date: Some("Nov 9".to_string()),
                ..RawDate::default()
            }),
            address: Some(RawAddress::Lines(vec![
                "123 Main St".to_string(),
                "Boerne, TX 78006".to_string(),
            ])),
            venue: None,
            link: Some("https://example.com".to_string()),
        };

        let json = serde_json::to_string(&event).unwrap();
        let parsed: RawEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, parsed);
    }
}
