use crate::calendar::{CalendarState, OutOfTimeError};
use crate::entry::{format_date, normalize, parse_date, sanitize, InvalidDate};
use time::Date;
use tracing::{debug, trace};

/// The date field together with the calendar it controls.
///
/// The field text and the calendar's viewed month always follow the
/// selection: every method that changes the selection finishes by calling
/// [`DatePicker::sync_from_selection()`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker {
    text: String,
    calendar: CalendarState,
}

/// What happened when the date field was committed
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Commit {
    /// The field was empty, so the selection was cleared
    Cleared,
    /// The field resolved to a date, which is now selected
    Selected(Date),
    /// The field could not be resolved; its text was reset to the current
    /// selection
    Reverted(InvalidDate),
}

impl DatePicker {
    pub(crate) fn new(calendar: CalendarState) -> DatePicker {
        let mut picker = DatePicker {
            text: String::new(),
            calendar,
        };
        picker.sync_from_selection();
        picker
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.calendar.selected()
    }

    /// Replace the field's contents with `raw`, minus any characters that
    /// can't be part of a date.  Nothing is parsed until the next commit.
    pub(crate) fn set_text(&mut self, raw: &str) {
        let text = sanitize(raw);
        trace!(raw, %text, "Date field edited");
        self.text = text.into_string();
    }

    /// Type a character at the end of the field.  Returns `false` if the
    /// character was discarded.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let before = self.text.len();
        let mut raw = self.text.clone();
        raw.push(ch);
        self.set_text(&raw);
        self.text.len() != before
    }

    /// Delete the last character of the field.  Returns `false` if the field
    /// was already empty.
    pub(crate) fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Resolve the field's text to a date and select it.
    ///
    /// An empty field clears the selection.  Text that doesn't resolve to a
    /// real date is thrown away in favor of the current selection (or
    /// nothing).
    pub(crate) fn commit(&mut self) -> Commit {
        let text = sanitize(&self.text);
        if text.is_empty() {
            debug!("Empty date field committed; clearing selection");
            self.clear();
            return Commit::Cleared;
        }
        match parse_date(&normalize(&text, self.calendar.viewing())) {
            Ok(date) => {
                debug!(%text, %date, "Date field committed");
                self.select(date);
                Commit::Selected(date)
            }
            Err(e) => {
                self.text = self
                    .calendar
                    .selected()
                    .map(format_date)
                    .unwrap_or_default();
                Commit::Reverted(e)
            }
        }
    }

    /// Make `date` the selected date
    pub(crate) fn select(&mut self, date: Date) {
        self.calendar.select(date);
        self.sync_from_selection();
    }

    /// Handle a day in the calendar grid being chosen.  The day becomes the
    /// only selected date, even if it was already selected.
    pub(crate) fn activate_cell(&mut self, date: Date) {
        debug!(%date, "Calendar cell activated");
        self.select(date);
    }

    /// Record the current date, as read from the clock just before handling
    /// an event
    pub(crate) fn set_today(&mut self, today: Date) {
        self.calendar.set_today(today);
    }

    pub(crate) fn select_today(&mut self) {
        self.select(self.calendar.today());
    }

    pub(crate) fn select_tomorrow(&mut self) -> Result<(), OutOfTimeError> {
        let tomorrow = self.calendar.today().next_day().ok_or(OutOfTimeError)?;
        self.select(tomorrow);
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.calendar.clear();
        self.sync_from_selection();
    }

    pub(crate) fn view_next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.calendar.view_next_month()
    }

    pub(crate) fn view_previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.calendar.view_previous_month()
    }

    pub(crate) fn view_today(&mut self) {
        self.calendar.view_today();
    }

    pub(crate) fn move_cursor(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        self.calendar.move_by_days(days)
    }

    /// Bring the field text and the viewed month in line with the selection:
    /// both show the selected date, or, with nothing selected, the field is
    /// emptied and the calendar returns to today.
    fn sync_from_selection(&mut self) {
        let selected = self.calendar.selected();
        debug!(?selected, "Selection changed");
        self.text = selected.map(format_date).unwrap_or_default();
        let today = self.calendar.today();
        self.calendar.set_viewing(selected.unwrap_or(today));
    }
}
