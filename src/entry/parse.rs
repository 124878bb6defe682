use super::normalize::NormalizedTriple;
use thiserror::Error;
use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

/// `MM/dd/yyyy` with the zero-padding optional, so that `4/5/2024` and
/// `04/05/2024` are both accepted
static NUMERIC_DATE_FMT: &[BorrowedFormatItem<'_>] = format_description!(
    "[month padding:none]/[day padding:none]/[year padding:none]"
);

/// Strictly parse normalized date-field text.
///
/// The month & day must be one or two digits, the year one to four digits,
/// and together they must name a day that actually exists.  Year 0 is
/// rejected, as are years before it.
pub(crate) fn parse_date(normalized: &NormalizedTriple<'_>) -> Result<Date, InvalidDate> {
    let text = normalized.to_string();
    match Date::parse(&text, NUMERIC_DATE_FMT) {
        Ok(date) if date.year() >= 1 => Ok(date),
        Ok(_) => Err(InvalidDate { text, source: None }),
        Err(source) => Err(InvalidDate {
            text,
            source: Some(source),
        }),
    }
}

/// Format a date in the picker's canonical `MM/dd/yyyy` form
pub(crate) fn format_date(date: Date) -> String {
    format!(
        "{:02}/{:02}/{:04}",
        u8::from(date.month()),
        date.day(),
        date.year()
    )
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{text:?} is not a valid date")]
pub(crate) struct InvalidDate {
    text: String,
    source: Option<time::error::Parse>,
}

impl InvalidDate {
    /// The normalized text that failed to parse
    pub(crate) fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{normalize, sanitize};
    use time::macros::date;

    // January has 31 days, so nothing typed below gets its day clamped.
    const VIEWING: Date = date!(2024 - 01 - 20);

    fn parse(text: &str) -> Result<Date, InvalidDate> {
        parse_date(&normalize(&sanitize(text), VIEWING))
    }

    #[test]
    fn test_padded() {
        assert_eq!(parse("03/07/2024").unwrap(), date!(2024 - 03 - 07));
    }

    #[test]
    fn test_unpadded() {
        assert_eq!(parse("12/5/2099").unwrap(), date!(2099 - 12 - 05));
        assert_eq!(parse("3/7/2024").unwrap(), date!(2024 - 03 - 07));
    }

    #[test]
    fn test_short_years_are_literal() {
        assert_eq!(parse("1/1/5").unwrap(), date!(0005 - 01 - 01));
        assert_eq!(parse("1/1/123").unwrap(), date!(0123 - 01 - 01));
    }

    #[test]
    fn test_nonexistent_day() {
        let e = parse("4/31/2024").unwrap_err();
        assert_eq!(e.text(), "4/31/2024");
        assert_eq!(e.to_string(), "\"4/31/2024\" is not a valid date");
        assert!(parse("2/29/2023").is_err());
        assert_eq!(parse("2/29/2024").unwrap(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_year_zero() {
        let e = parse("1/1/0").unwrap_err();
        assert_eq!(e.text(), "1/1/0");
        assert!(std::error::Error::source(&e).is_none());
        assert!(parse("1/1/0000").is_err());
        assert_eq!(parse("1/1/1").unwrap(), date!(0001 - 01 - 01));
    }

    #[test]
    fn test_empty_year() {
        let e = parse("7/4/").unwrap_err();
        assert_eq!(e.text(), "7/4/");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn test_overlong_pieces() {
        assert!(parse("007/4/2024").is_err());
        assert!(parse("7/004/2024").is_err());
        assert!(parse("7/4/20245").is_err());
    }

    #[test]
    fn test_trailing_pieces() {
        assert!(parse("1/2/2024/5").is_err());
        assert!(parse("1/2/2024/").is_err());
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date!(2024 - 03 - 07)), "03/07/2024");
        assert_eq!(format_date(date!(2099 - 12 - 05)), "12/05/2099");
        assert_eq!(format_date(date!(0005 - 01 - 01)), "01/01/0005");
    }

    #[test]
    fn test_format_then_parse() {
        for date in [
            date!(2024 - 03 - 07),
            date!(2000 - 02 - 29),
            date!(1999 - 12 - 31),
            date!(0123 - 10 - 01),
        ] {
            assert_eq!(parse(&format_date(date)).unwrap(), date);
        }
    }
}
