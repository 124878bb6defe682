use crate::calendar::{local_today, MonthView, MONTH_VIEW_WIDTH};
use crate::field::{DateField, FIELD_HEIGHT};
use crate::help::Help;
use crate::picker::{Commit, DatePicker};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Widget,
    DefaultTerminal,
};
use std::io::{self, Write};
use time::Date;
use tracing::debug;

/// Blank lines above the date field
const TOP_MARGIN: u16 = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: DatePicker,
    state: AppState,
    calendar_open: bool,
}

impl App {
    pub(crate) fn new(picker: DatePicker) -> App {
        App {
            picker,
            state: AppState::Editing,
            calendar_open: false,
        }
    }

    /// Run the picker until the user quits, returning the date selected at
    /// that point
    pub(crate) fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<Option<Date>> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(self.picker.selected())
    }

    fn draw(&self, terminal: &mut DefaultTerminal) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        let event = read()?;
        self.refresh_today();
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = event.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Editing => match key {
                KeyCode::Char(ch) => self.picker.push_char(ch),
                KeyCode::Backspace => self.picker.backspace(),
                KeyCode::Enter => {
                    self.commit();
                    true
                }
                KeyCode::Tab | KeyCode::Down => {
                    self.commit();
                    self.calendar_open = true;
                    self.state = AppState::Browsing;
                    true
                }
                KeyCode::Esc => {
                    self.commit();
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Browsing => match key {
                KeyCode::Char('h') | KeyCode::Left => self.picker.move_cursor(-1).is_ok(),
                KeyCode::Char('l') | KeyCode::Right => self.picker.move_cursor(1).is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.picker.move_cursor(-7).is_ok(),
                KeyCode::Char('j') | KeyCode::Down => self.picker.move_cursor(7).is_ok(),
                KeyCode::Char('<') | KeyCode::PageUp => self.picker.view_previous_month().is_ok(),
                KeyCode::Char('>') | KeyCode::PageDown => self.picker.view_next_month().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.picker.view_today();
                    true
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.picker.activate_cell(self.picker.calendar().viewing());
                    true
                }
                KeyCode::Char('t') => {
                    self.picker.select_today();
                    true
                }
                KeyCode::Char('m') => self.picker.select_tomorrow().is_ok(),
                KeyCode::Char('x') | KeyCode::Delete => {
                    self.picker.clear();
                    true
                }
                KeyCode::Char('i') | KeyCode::Tab => {
                    self.state = AppState::Editing;
                    true
                }
                KeyCode::Esc => {
                    self.calendar_open = false;
                    self.state = AppState::Editing;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                KeyCode::Char('q') => {
                    self.state = AppState::Quitting;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Browsing;
                true
            }
            AppState::Quitting => false,
        }
    }

    // The picker may be left open across midnight.
    fn refresh_today(&mut self) {
        match local_today() {
            Ok(today) => self.picker.set_today(today),
            Err(e) => debug!(error = %e, "Could not read local date; keeping the old one"),
        }
    }

    // Leaving the field is what commits it, so this is called on every
    // transition out of `AppState::Editing`.
    fn commit(&mut self) {
        if let Commit::Reverted(e) = self.picker.commit() {
            debug!(rejected = e.text(), error = %e, "Reverting date field");
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [column] = Layout::horizontal([MONTH_VIEW_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let month_view = MonthView::new(self.picker.calendar())
            .focused(self.state == AppState::Browsing);
        let [_, field_area, calendar_area] = Layout::vertical([
            Constraint::Length(TOP_MARGIN),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(month_view.height()),
        ])
        .areas(column);
        DateField::new(self.picker.text())
            .focused(self.state == AppState::Editing)
            .render(field_area, buf);
        if self.calendar_open {
            month_view.render(calendar_area, buf);
        }
        if self.state == AppState::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Editing,
    Browsing,
    Helping,
    Quitting,
}
