use super::{end_of_month, start_of_month};
use std::iter::successors;
use time::{Date, Weekday, Weekday::*};

const DAYS_IN_WEEK: usize = 7;

pub(super) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// One row of the month grid.  Slots for days beyond the ends of time are
/// `None`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
// Invariant: At least one element of the array is Some
pub(crate) struct Week([Option<Date>; DAYS_IN_WEEK]);

impl Week {
    /// Returns the Week containing the given date, which can be at any day of
    /// the week
    fn containing(date: Date) -> Week {
        let i = usize::from(date.weekday().index0());
        let mut week = Week([None; DAYS_IN_WEEK]);
        week.set(date);
        for d in iter_days_before(date).take(i) {
            week.set(d);
        }
        for d in iter_days_after(date).take(DAYS_IN_WEEK - i - 1) {
            week.set(d);
        }
        week
    }

    fn set(&mut self, date: Date) {
        let i = usize::from(date.weekday().index0());
        assert!(i < DAYS_IN_WEEK, "weekday index should be less than 7");
        self.0[i] = Some(date);
    }

    pub(super) fn get(&self, wd: Weekday) -> Option<Date> {
        self.0.get(usize::from(wd.index0())).copied().flatten()
    }

    /// The days of the week in order from Sunday, skipping missing slots
    pub(super) fn days(self) -> impl Iterator<Item = Date> {
        self.0.into_iter().flatten()
    }
}

/// The weeks overlapping the month containing `viewing`, from the week
/// containing the first of the month to the week containing its last day
pub(super) fn month_grid(viewing: Date) -> Vec<Week> {
    let last = end_of_month(viewing);
    successors(Some(Week::containing(start_of_month(viewing))), |week| {
        week.get(Saturday)
            .filter(|&sat| sat < last)
            .and_then(Date::next_day)
            .map(Week::containing)
    })
    .collect()
}

fn iter_days_after(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day()).skip(1)
}

fn iter_days_before(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day()).skip(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_containing() {
        let week = Week::containing(date!(2023 - 11 - 16));
        let mut iter = week.days().map(|d| (d.weekday(), d));
        assert_eq!(iter.next(), Some((Sunday, date!(2023 - 11 - 12))));
        assert_eq!(iter.next(), Some((Monday, date!(2023 - 11 - 13))));
        assert_eq!(iter.next(), Some((Tuesday, date!(2023 - 11 - 14))));
        assert_eq!(iter.next(), Some((Wednesday, date!(2023 - 11 - 15))));
        assert_eq!(iter.next(), Some((Thursday, date!(2023 - 11 - 16))));
        assert_eq!(iter.next(), Some((Friday, date!(2023 - 11 - 17))));
        assert_eq!(iter.next(), Some((Saturday, date!(2023 - 11 - 18))));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_containing_from_sunday_and_saturday() {
        let from_sunday = Week::containing(date!(2023 - 11 - 12));
        let from_saturday = Week::containing(date!(2023 - 11 - 18));
        assert_eq!(from_sunday, from_saturday);
        assert_eq!(from_sunday.get(Sunday), Some(date!(2023 - 11 - 12)));
        assert_eq!(from_sunday.get(Saturday), Some(date!(2023 - 11 - 18)));
    }

    #[test]
    fn test_month_grid() {
        let grid = month_grid(date!(2026 - 10 - 19));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].get(Sunday), Some(date!(2026 - 09 - 27)));
        assert_eq!(grid[0].get(Thursday), Some(date!(2026 - 10 - 01)));
        assert_eq!(grid[4].get(Saturday), Some(date!(2026 - 10 - 31)));
    }

    #[test]
    fn test_month_grid_spills_into_next_month() {
        let grid = month_grid(date!(2024 - 04 - 30));
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0].get(Sunday), Some(date!(2024 - 03 - 31)));
        assert_eq!(grid[4].get(Tuesday), Some(date!(2024 - 04 - 30)));
        assert_eq!(grid[4].get(Saturday), Some(date!(2024 - 05 - 04)));
    }

    #[test]
    fn test_month_grid_four_weeks() {
        let grid = month_grid(date!(2015 - 02 - 14));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[0].get(Sunday), Some(date!(2015 - 02 - 01)));
        assert_eq!(grid[3].get(Saturday), Some(date!(2015 - 02 - 28)));
    }

    #[test]
    fn test_month_grid_six_weeks() {
        // August 2026 starts on a Saturday and has 31 days
        let grid = month_grid(date!(2026 - 08 - 01));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0].days().last(), Some(date!(2026 - 08 - 01)));
        assert_eq!(grid[5].get(Monday), Some(date!(2026 - 08 - 31)));
    }

    #[test]
    fn test_month_grid_at_end_of_time() {
        let grid = month_grid(Date::MAX);
        let last = grid.last().unwrap();
        assert_eq!(last.get(Friday), Some(Date::MAX));
        assert_eq!(last.get(Saturday), None);
        assert_eq!(last.days().count(), 6);
    }
}
