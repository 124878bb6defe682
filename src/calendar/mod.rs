mod grid;
mod widget;
use self::grid::{month_grid, Week};
pub(crate) use self::widget::{MonthView, MONTH_VIEW_WIDTH};
use thiserror::Error;
use time::{error::IndeterminateOffset, Date, Duration, Month, OffsetDateTime, Time};

/// The picker's calendar: which date is selected (if any) and which month is
/// being viewed.
///
/// The viewed month is stored as a full date; its month & year are what the
/// grid shows, and its day is where the grid's cursor sits.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarState {
    today: Date,
    viewing: Date,
    selected: Option<Date>,
}

impl CalendarState {
    pub(crate) fn new(today: Date) -> CalendarState {
        CalendarState {
            today,
            viewing: today,
            selected: None,
        }
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    /// Move "today" forwards when the clock passes midnight.  Neither the
    /// selection nor the viewed date are touched.
    pub(crate) fn set_today(&mut self, today: Date) {
        self.today = today;
    }

    pub(crate) fn viewing(&self) -> Date {
        self.viewing
    }

    pub(crate) fn set_viewing(&mut self, date: Date) {
        self.viewing = date;
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    /// Make `date` the one and only selected date
    pub(crate) fn select(&mut self, date: Date) {
        self.selected = Some(date);
    }

    pub(crate) fn clear(&mut self) {
        self.selected = None;
    }

    pub(crate) fn is_selected(&self, date: Date) -> bool {
        self.selected == Some(date)
    }

    pub(crate) fn is_today(&self, date: Date) -> bool {
        self.today == date
    }

    pub(crate) fn in_viewed_month(&self, date: Date) -> bool {
        in_range(
            date,
            start_of_month(self.viewing),
            end_of_month(self.viewing),
        )
    }

    /// Weeks of the viewed month, each starting on a Sunday
    pub(crate) fn month_grid(&self) -> Vec<Week> {
        month_grid(self.viewing)
    }

    pub(crate) fn view_next_month(&mut self) -> Result<(), OutOfTimeError> {
        self.viewing = next_month(self.viewing).ok_or(OutOfTimeError)?;
        Ok(())
    }

    pub(crate) fn view_previous_month(&mut self) -> Result<(), OutOfTimeError> {
        self.viewing = previous_month(self.viewing).ok_or(OutOfTimeError)?;
        Ok(())
    }

    pub(crate) fn view_today(&mut self) {
        self.viewing = self.today;
    }

    /// Move the viewed date forwards (or, for negative `days`, backwards) by
    /// the given number of days, crossing into other months as needed
    pub(crate) fn move_by_days(&mut self, days: i64) -> Result<(), OutOfTimeError> {
        self.viewing = self
            .viewing
            .checked_add(Duration::days(days))
            .ok_or(OutOfTimeError)?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

/// Returns `true` if `date` is between `start` and `end`, inclusive
pub(crate) fn in_range(date: Date, start: Date, end: Date) -> bool {
    (start..=end).contains(&date)
}

fn start_of_month(date: Date) -> Date {
    // Every month has a day 1.
    date.replace_day(1).unwrap_or(date)
}

pub(crate) fn end_of_month(date: Date) -> Date {
    // Every month has a day 28.
    (28..=31)
        .rev()
        .find_map(|day| date.replace_day(day).ok())
        .unwrap_or(date)
}

pub(crate) fn last_day_of_month(date: Date) -> u8 {
    end_of_month(date).day()
}

/// The current local date
pub(crate) fn local_today() -> Result<Date, IndeterminateOffset> {
    OffsetDateTime::now_local().map(|now| clear_time(now).date())
}

/// Midnight at the start of the same day
pub(crate) fn clear_time(moment: OffsetDateTime) -> OffsetDateTime {
    moment.replace_time(Time::MIDNIGHT)
}

/// The same day of the month in the following month, or that month's last
/// day if it is shorter
fn next_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::December => (date.year().checked_add(1)?, Month::January),
        m => (date.year(), m.next()),
    };
    same_day_in(date, year, month)
}

fn previous_month(date: Date) -> Option<Date> {
    let (year, month) = match date.month() {
        Month::January => (date.year().checked_sub(1)?, Month::December),
        m => (date.year(), m.previous()),
    };
    same_day_in(date, year, month)
}

fn same_day_in(date: Date, year: i32, month: Month) -> Option<Date> {
    let first = Date::from_calendar_date(year, month, 1).ok()?;
    first
        .replace_day(date.day().min(last_day_of_month(first)))
        .ok()
}
