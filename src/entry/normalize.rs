use super::sanitize::Sanitized;
use crate::calendar::last_day_of_month;
use std::borrow::Cow;
use std::fmt;
use std::num::IntErrorKind;
use time::Date;

const SEPARATOR: char = '/';

/// The month, day, & year pieces of the date field, in that order.  A piece
/// is `None` when the text doesn't reach that far.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TokenTriple<'a> {
    pub(crate) month: Option<&'a str>,
    pub(crate) day: Option<&'a str>,
    pub(crate) year: Option<&'a str>,
}

impl<'a> TokenTriple<'a> {
    /// Split on `/` into at most three pieces.  Any further separators stay
    /// in the year piece.
    pub(crate) fn split(text: &'a Sanitized) -> TokenTriple<'a> {
        let mut tokens = text.as_str().splitn(3, SEPARATOR);
        TokenTriple {
            month: tokens.next(),
            day: tokens.next(),
            year: tokens.next(),
        }
    }
}

/// A [`TokenTriple`] with every piece filled in and clamped.  It always has
/// the shape `M/d/y`, but the pieces need not form a real date.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NormalizedTriple<'a> {
    month: Cow<'a, str>,
    day: Cow<'a, str>,
    year: Cow<'a, str>,
}

impl fmt::Display for NormalizedTriple<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{SEPARATOR}{}{SEPARATOR}{}",
            self.month, self.day, self.year
        )
    }
}

/// Fill in & clamp the pieces of `text`, taking defaults and limits from the
/// month being viewed.
///
/// - A missing month becomes the viewed month.  Months are clamped to 1–12;
///   an empty month piece counts as too small.
/// - A missing day becomes 1.  Days are clamped to 1 through the last day of
///   the *viewed* month, even when the month piece names a different month.
/// - A missing year becomes the viewed year.  An empty year piece (as in
///   `7/4/`) is kept, and the parser rejects it.  A year from 10 to 99
///   is added to the viewed year rounded to the nearest millennium
///   (`12` while viewing 2023 gives 2012).  Other years are left alone.
///
/// Pieces that are already in range are kept verbatim, leading zeroes and
/// all.
pub(crate) fn normalize(text: &Sanitized, viewing: Date) -> NormalizedTriple<'_> {
    let tokens = TokenTriple::split(text);
    NormalizedTriple {
        month: normalize_month(tokens.month, viewing),
        day: normalize_day(tokens.day, viewing),
        year: normalize_year(tokens.year, viewing),
    }
}

fn normalize_month(token: Option<&str>, viewing: Date) -> Cow<'_, str> {
    let Some(token) = token else {
        return Cow::Owned(u8::from(viewing.month()).to_string());
    };
    match token_value(token) {
        None | Some(0) => Cow::Borrowed("1"),
        Some(13..) => Cow::Borrowed("12"),
        Some(_) => Cow::Borrowed(token),
    }
}

fn normalize_day(token: Option<&str>, viewing: Date) -> Cow<'_, str> {
    let Some(token) = token else {
        return Cow::Borrowed("1");
    };
    let last_day = last_day_of_month(viewing);
    match token_value(token) {
        None | Some(0) => Cow::Borrowed("1"),
        Some(day) if day > u32::from(last_day) => Cow::Owned(last_day.to_string()),
        Some(_) => Cow::Borrowed(token),
    }
}

fn normalize_year(token: Option<&str>, viewing: Date) -> Cow<'_, str> {
    match token {
        None => Cow::Owned(viewing.year().to_string()),
        Some(token) => match token_value(token) {
            Some(short @ 10..=99) => {
                Cow::Owned(expand_two_digit_year(short, viewing.year()).to_string())
            }
            _ => Cow::Borrowed(token),
        },
    }
}

fn expand_two_digit_year(short: u32, viewed_year: i32) -> i64 {
    let millennium = (i64::from(viewed_year) + 500).div_euclid(1000) * 1000;
    millennium + i64::from(short)
}

/// The numeric value of a piece, or `None` if it isn't a run of digits.
/// Values too large for a `u32` saturate.
fn token_value(token: &str) -> Option<u32> {
    match token.parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}
