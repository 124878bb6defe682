use std::fmt;

/// Date-field text containing nothing but ASCII digits and `/`
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Sanitized(String);

impl Sanitized {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Sanitized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns `true` if `ch` may appear in the date field
pub(crate) fn is_accepted(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '/'
}

/// Strip `raw` down to the characters accepted by the date field.
///
/// Surrounding whitespace and every run of other characters are removed;
/// the accepted characters keep their original order.  Sanitizing is
/// idempotent.
pub(crate) fn sanitize(raw: &str) -> Sanitized {
    Sanitized(raw.trim().chars().filter(|&ch| is_accepted(ch)).collect())
}
