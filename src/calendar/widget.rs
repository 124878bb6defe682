use super::grid::WeekdayExt;
use super::CalendarState;
use crate::theme::{calendar::*, BASE_STYLE, FOCUSED_BORDER_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    text::Text,
    widgets::{Block, Clear, Paragraph, Widget},
};
use time::Date;

static WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

static TODAY_SHORTCUT: &str = "t:Today";

static TOMORROW_SHORTCUT: &str = "m:Tomorrow";

static PREV_MONTH_MARKER: &str = "<";

static NEXT_MONTH_MARKER: &str = ">";

/// Width of the grid of days in columns
const GRID_WIDTH: u16 = 20;

/// Number of columns per day of week, including the gap after it
const DAY_WIDTH: u16 = 3;

/// Number of lines above the first week: the shortcuts, the month title, and
/// the weekday header
const HEADER_LINES: u16 = 3;

/// Columns taken up by the border and the padding inside it
const FRAME_WIDTH: u16 = 4;

/// Lines taken up by the border
const FRAME_HEIGHT: u16 = 2;

/// Total width of the widget in columns
pub(crate) const MONTH_VIEW_WIDTH: u16 = GRID_WIDTH + FRAME_WIDTH;

/*
 * ┌──────────────────────┐
 * │ t:Today   m:Tomorrow │
 * │ <   October 2026   > │
 * │ Su Mo Tu We Th Fr Sa │
 * │ 27 28 29 30  1  2  3 │
 * │  4  5  6  7  8  9 10 │
 * │ 11 12 13 14 15 16 17 │
 * │ 18 19 20 21 22 23 24 │
 * │ 25 26 27 28 29 30 31 │
 * └──────────────────────┘
 */

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView<'a> {
    calendar: &'a CalendarState,
    focused: bool,
}

impl<'a> MonthView<'a> {
    pub(crate) fn new(calendar: &'a CalendarState) -> MonthView<'a> {
        MonthView {
            calendar,
            focused: false,
        }
    }

    /// When focused, the border is highlighted and the viewed date is
    /// underlined to act as a cursor
    pub(crate) fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Number of lines needed to draw the viewed month
    pub(crate) fn height(&self) -> u16 {
        u16::try_from(self.calendar.month_grid().len())
            .unwrap_or(u16::MAX)
            .saturating_add(HEADER_LINES + FRAME_HEIGHT)
    }

    fn day_style(&self, date: Date) -> Style {
        let mut style = if self.calendar.is_selected(date) {
            SELECTED_STYLE
        } else if self.calendar.in_viewed_month(date) {
            BASE_STYLE
        } else {
            OTHER_MONTH_STYLE
        };
        if self.calendar.is_today(date) {
            style = style.add_modifier(TODAY_MODIFIER);
        }
        if self.focused && date == self.calendar.viewing() {
            style = style.add_modifier(CURSOR_MODIFIER);
        }
        style
    }
}

impl Widget for MonthView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered().style(BASE_STYLE).border_style(if self.focused {
            FOCUSED_BORDER_STYLE
        } else {
            BASE_STYLE
        });
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);
        let mut canvas = BufferCanvas::new(inner, buf);
        canvas.draw_shortcuts();
        canvas.draw_title(self.calendar.viewing());
        canvas.mvprint(2, 0, WEEKDAY_HEADER, WEEKDAY_STYLE);
        for (i, week) in std::iter::zip(0u16.., self.calendar.month_grid()) {
            for date in week.days() {
                canvas.draw_day(i, date, self.day_style(date));
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_shortcuts(&mut self) {
        self.mvprint(0, 0, TODAY_SHORTCUT, SHORTCUT_STYLE);
        self.mvprint(
            0,
            GRID_WIDTH.saturating_sub(text_width(TOMORROW_SHORTCUT)),
            TOMORROW_SHORTCUT,
            SHORTCUT_STYLE,
        );
    }

    fn draw_title(&mut self, viewing: Date) {
        let title = format!("{} {}", viewing.month(), viewing.year());
        self.mvprint(1, 0, PREV_MONTH_MARKER, TITLE_STYLE);
        self.mvprint(
            1,
            GRID_WIDTH.saturating_sub(text_width(&title)) / 2,
            title,
            TITLE_STYLE,
        );
        self.mvprint(1, GRID_WIDTH - 1, NEXT_MONTH_MARKER, TITLE_STYLE);
    }

    fn draw_day(&mut self, week_no: u16, date: Date, style: Style) {
        self.mvprint(
            HEADER_LINES + week_no,
            DAY_WIDTH * date.weekday().index0(),
            format!("{:2}", date.day()),
            style,
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Text::raw(s).width()).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};
    use time::macros::date;

    fn lines(buf: &Buffer) -> Vec<String> {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn render(view: MonthView<'_>) -> Buffer {
        let area = Rect::new(0, 0, MONTH_VIEW_WIDTH, view.height());
        let mut buffer = Buffer::empty(area);
        view.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn test_layout() {
        let cal = CalendarState::new(date!(2026 - 10 - 19));
        let view = MonthView::new(&cal);
        assert_eq!(view.height(), 10);
        let buffer = render(view);
        assert_eq!(
            lines(&buffer),
            [
                "┌──────────────────────┐",
                "│ t:Today   m:Tomorrow │",
                "│ <   October 2026   > │",
                "│ Su Mo Tu We Th Fr Sa │",
                "│ 27 28 29 30  1  2  3 │",
                "│  4  5  6  7  8  9 10 │",
                "│ 11 12 13 14 15 16 17 │",
                "│ 18 19 20 21 22 23 24 │",
                "│ 25 26 27 28 29 30 31 │",
                "└──────────────────────┘",
            ]
        );
    }

    #[test]
    fn test_six_week_month() {
        let mut cal = CalendarState::new(date!(2026 - 10 - 19));
        cal.set_viewing(date!(2026 - 08 - 15));
        let view = MonthView::new(&cal);
        assert_eq!(view.height(), 11);
        let buffer = render(view);
        assert_eq!(
            lines(&buffer)[2..=9],
            [
                "│ <   August 2026    > │",
                "│ Su Mo Tu We Th Fr Sa │",
                "│ 26 27 28 29 30 31  1 │",
                "│  2  3  4  5  6  7  8 │",
                "│  9 10 11 12 13 14 15 │",
                "│ 16 17 18 19 20 21 22 │",
                "│ 23 24 25 26 27 28 29 │",
                "│ 30 31  1  2  3  4  5 │",
            ]
        );
    }

    #[test]
    fn test_day_styles() {
        let mut cal = CalendarState::new(date!(2026 - 10 - 19));
        cal.select(date!(2026 - 10 - 22));
        let buffer = render(MonthView::new(&cal));
        // Today: Monday of the fourth week
        assert!(buffer[(5, 7)].modifier.contains(Modifier::BOLD));
        assert!(!buffer[(5, 7)].modifier.contains(Modifier::UNDERLINED));
        assert_eq!(buffer[(5, 7)].fg, Color::White);
        // Selected: Thursday of the fourth week
        assert_eq!(buffer[(14, 7)].bg, Color::Blue);
        assert_eq!(buffer[(15, 7)].bg, Color::Blue);
        // September 27th
        assert_eq!(buffer[(3, 4)].fg, Color::DarkGray);
        // October 1st
        assert_eq!(buffer[(15, 4)].fg, Color::White);
    }

    #[test]
    fn test_cursor_when_focused() {
        let mut cal = CalendarState::new(date!(2026 - 10 - 19));
        cal.set_viewing(date!(2026 - 10 - 06));
        let buffer = render(MonthView::new(&cal).focused(true));
        // October 6th: Tuesday of the second week
        assert!(buffer[(8, 5)].modifier.contains(Modifier::UNDERLINED));
        assert!(buffer[(9, 5)].modifier.contains(Modifier::UNDERLINED));
        assert!(!buffer[(5, 7)].modifier.contains(Modifier::UNDERLINED));
        assert_eq!(buffer[(0, 0)].fg, Color::LightBlue);
    }
}
