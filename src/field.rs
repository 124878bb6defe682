use crate::theme::{
    field::{CURSOR_STYLE, PLACEHOLDER_STYLE},
    BASE_STYLE, FOCUSED_BORDER_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Widget},
};

pub(crate) const FIELD_HEIGHT: u16 = 3;

static TITLE: &str = " Date ";

static PLACEHOLDER: &str = "Select a Date";

/*
 * ┌ Date ────────────────┐
 * │ 03/07/2024█          │
 * └──────────────────────┘
 */

/// The free-text date field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateField<'a> {
    text: &'a str,
    focused: bool,
}

impl<'a> DateField<'a> {
    pub(crate) fn new(text: &'a str) -> DateField<'a> {
        DateField {
            text,
            focused: false,
        }
    }

    /// When focused, the border is highlighted and a cursor is drawn after
    /// the text
    pub(crate) fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn to_line(self) -> Line<'a> {
        let mut spans = Vec::with_capacity(2);
        if !self.text.is_empty() {
            spans.push(Span::styled(self.text, BASE_STYLE));
        }
        if self.focused {
            spans.push(Span::styled(" ", CURSOR_STYLE));
        }
        if self.text.is_empty() {
            spans.push(Span::styled(PLACEHOLDER, PLACEHOLDER_STYLE));
        }
        Line::from_iter(spans)
    }
}

impl Widget for DateField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(TITLE)
            .style(BASE_STYLE)
            .border_style(if self.focused {
                FOCUSED_BORDER_STYLE
            } else {
                BASE_STYLE
            });
        let text_area = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);
        self.to_line().render(text_area, buf);
    }
}
