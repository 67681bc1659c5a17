//! Core types and parsing: months, clock times, addresses, CSV and ICS output

pub mod address;
pub mod calendar;
pub mod dates;
pub mod event;
pub mod export;
pub mod locale;

pub use address::{AddressParts, parse_address};
pub use calendar::{
    CalendarBuild, CalendarOptions, PROD_ID, SkipReason, SkippedEvent, build_calendar,
};
pub use dates::{TimeRange, extract_month_days, parse_clock, parse_month_day, parse_time_range};
pub use event::{ClockTime, Month, MonthDay, NormalizedEvent};
pub use export::{CSV_COLUMNS, csv_header, csv_row, escape_field, to_csv, unescape_field};
pub use locale::month_for_token;
