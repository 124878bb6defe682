//! Turning whatever the user typed into the date field into a date
//!
//! Text passes through three stages: [`sanitize()`] drops every character
//! that can't be part of a numeric date, [`normalize()`] fills in and clamps
//! the month, day, & year pieces using the currently viewed month, and
//! [`parse_date()`] performs the final strict parse.
mod normalize;
mod parse;
mod sanitize;
pub(crate) use self::normalize::normalize;
pub(crate) use self::parse::{format_date, parse_date, InvalidDate};
pub(crate) use self::sanitize::sanitize;
use time::Date;

/// Run free-form text through all three stages, with `viewing` supplying the
/// month & year context
pub(crate) fn resolve(raw: &str, viewing: Date) -> Result<Date, InvalidDate> {
    parse_date(&normalize(&sanitize(raw), viewing))
}
