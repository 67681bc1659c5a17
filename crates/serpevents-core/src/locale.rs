//! Month-token recognition for the locales seen in source data.
//!
//! Source records arrive with English or Spanish month abbreviations. All of
//! them resolve through one lookup table, so supporting another locale means
//! extending the table, not changing the scanning code.

use crate::event::Month;

/// Recognized month tokens, lowercase, mapped to their canonical month.
///
/// The twelve English three-letter abbreviations plus the Spanish
/// abbreviations that differ from them. The Spanish token `mar` doubles as
/// the weekday martes; it always resolves to March here, since no consumer
/// of this table needs weekdays.
const MONTH_TOKENS: &[(&str, Month)] = &[
    ("jan", Month::Jan),
    ("feb", Month::Feb),
    ("mar", Month::Mar),
    ("apr", Month::Apr),
    ("may", Month::May),
    ("jun", Month::Jun),
    ("jul", Month::Jul),
    ("aug", Month::Aug),
    ("sep", Month::Sep),
    ("oct", Month::Oct),
    ("nov", Month::Nov),
    ("dec", Month::Dec),
    // Spanish: enero, abril, agosto, diciembre
    ("ene", Month::Jan),
    ("abr", Month::Apr),
    ("ago", Month::Aug),
    ("dic", Month::Dec),
];

/// Looks up a whole token, case-insensitively.
///
/// Tokens are matched in full; `ago` inside `Chicago` never reaches this
/// function because the tokenizer splits on non-alphanumeric boundaries.
pub fn month_for_token(token: &str) -> Option<Month> {
    MONTH_TOKENS
        .iter()
        .find(|(candidate, _)| token.eq_ignore_ascii_case(candidate))
        .map(|(_, month)| *month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_abbreviations() {
        assert_eq!(month_for_token("nov"), Some(Month::Nov));
        assert_eq!(month_for_token("NOV"), Some(Month::Nov));
        assert_eq!(month_for_token("Sep"), Some(Month::Sep));
    }

    #[test]
    fn spanish_abbreviations() {
        assert_eq!(month_for_token("ene"), Some(Month::Jan));
        assert_eq!(month_for_token("abr"), Some(Month::Apr));
        assert_eq!(month_for_token("ago"), Some(Month::Aug));
        assert_eq!(month_for_token("dic"), Some(Month::Dec));
    }

    #[test]
    fn mar_is_the_month_not_the_weekday() {
        assert_eq!(month_for_token("mar"), Some(Month::Mar));
        assert_eq!(month_for_token("MAR"), Some(Month::Mar));
    }

    #[test]
    fn unknown_tokens() {
        assert_eq!(month_for_token("sat"), None);
        assert_eq!(month_for_token("november"), None);
        assert_eq!(month_for_token(""), None);
    }
}
