//! Address decomposition for search-result venue addresses.
//!
//! Raw addresses arrive as one string, a list of lines, or not at all (with
//! a venue-level fallback chosen by the caller). The first line becomes the
//! street line; independently, any line shaped like `"…, XX"` (two uppercase
//! letters after a comma, optionally trailed by a five-digit code) supplies
//! the city, region, and postal code.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Region is exactly two uppercase letters after a comma; the postal code,
/// when present, is exactly five digits directly after the region.
static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+),\s*([A-Z]{2})(?:\s+(\d{5}))?$").expect("invalid region regex"));

/// Decomposed address fields. Every field is independently optional and
/// empty when unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParts {
    /// First line of the address block.
    pub line: String,
    /// Everything before the region token on the matching line.
    pub city: String,
    /// Two-letter region token.
    pub region: String,
    /// Five-digit postal code.
    pub postal_code: String,
}

/// Decomposes a list of address lines.
///
/// The city/region scan runs over every line, not just the first, so the
/// match may come from a different line than the one that supplied `line`.
pub fn parse_address<S: AsRef<str>>(lines: &[S]) -> AddressParts {
    let mut parts = AddressParts::default();

    if let Some(first) = lines.first() {
        parts.line = first.as_ref().trim().to_string();
    }

    for line in lines {
        if let Some(caps) = REGION_RE.captures(line.as_ref().trim()) {
            parts.city = caps[1].trim().to_string();
            parts.region = caps[2].to_string();
            parts.postal_code = caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            break;
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_plus_city_region_postal() {
        let parts = parse_address(&["123 Main St", "Boerne, TX 78006"]);
        assert_eq!(parts.line, "123 Main St");
        assert_eq!(parts.city, "Boerne");
        assert_eq!(parts.region, "TX");
        assert_eq!(parts.postal_code, "78006");
    }

    #[test]
    fn region_without_postal_code() {
        let parts = parse_address(&["Main Plaza", "Boerne, TX"]);
        assert_eq!(parts.city, "Boerne");
        assert_eq!(parts.region, "TX");
        assert_eq!(parts.postal_code, "");
    }

    #[test]
    fn single_line_supplies_everything() {
        let parts = parse_address(&["100 N Main St, Boerne, TX 78006"]);
        assert_eq!(parts.line, "100 N Main St, Boerne, TX 78006");
        // The segment before the region keeps its secondary line.
        assert_eq!(parts.city, "100 N Main St, Boerne");
        assert_eq!(parts.region, "TX");
        assert_eq!(parts.postal_code, "78006");
    }

    #[test]
    fn region_must_be_two_uppercase_letters() {
        let parts = parse_address(&["Boerne, Texas"]);
        assert_eq!(parts.line, "Boerne, Texas");
        assert_eq!(parts.region, "");

        let parts = parse_address(&["Boerne, tx"]);
        assert_eq!(parts.region, "");
    }

    #[test]
    fn postal_code_must_be_exactly_five_digits() {
        let parts = parse_address(&["Boerne, TX 78006-1234"]);
        assert_eq!(parts.region, "");
        assert_eq!(parts.postal_code, "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_address::<&str>(&[]), AddressParts::default());
    }
}
