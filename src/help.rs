use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

static TEXT: &[&str] = &[
    "h/l, LEFT/RIGHT  Previous/next day",
    "k/j, UP/DOWN     Previous/next week",
    "<, PAGE UP       Previous month",
    ">, PAGE DOWN     Next month",
    "0, HOME          View today",
    "SPACE, ENTER     Select the date",
    "t                Select today",
    "m                Select tomorrow",
    "x, DELETE        Clear the selection",
    "i, TAB           Edit the date field",
    "ESC              Close the calendar",
    "q                Quit",
    "",
    "Any key dismisses this help.",
];

/// Blank columns between the border and the text
const PADDING: u16 = 1;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help(pub(crate) Style);

impl Help {
    /// Size of the help box, borders included, before it is fitted to the
    /// screen
    fn size() -> (u16, u16) {
        let text_width = TEXT.iter().map(|s| s.len()).max().unwrap_or_default();
        let width = u16::try_from(text_width)
            .unwrap_or(u16::MAX)
            .saturating_add(2 * PADDING + 2);
        let height = u16::try_from(TEXT.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        (width, height)
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = Help::size();
        let [help_area] = Layout::horizontal([width.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let [help_area] = Layout::vertical([height.min(area.height)])
            .flex(Flex::Center)
            .areas(help_area);
        Clear.render(help_area, buf);
        Paragraph::new(TEXT.iter().copied().map(Line::raw).collect::<Vec<_>>())
            .block(
                Block::bordered()
                    .title(" Keys ")
                    .title_alignment(Alignment::Center)
                    .padding(Padding::horizontal(PADDING)),
            )
            .style(self.0)
            .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::BASE_STYLE;

    fn rows(area: Rect) -> Vec<String> {
        let mut buffer = Buffer::empty(area);
        Help(BASE_STYLE).render(area, &mut buffer);
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_exact_fit() {
        let rows = rows(Rect::new(0, 0, 40, 16));
        assert_eq!(rows[0], "┌──────────────── Keys ────────────────┐");
        assert_eq!(rows[1], "│ h/l, LEFT/RIGHT  Previous/next day   │");
        assert_eq!(rows[8], "│ m                Select tomorrow     │");
        assert_eq!(rows[13], "│                                      │");
        assert_eq!(rows[14], "│ Any key dismisses this help.         │");
        assert_eq!(rows[15], "└──────────────────────────────────────┘");
    }

    #[test]
    fn test_centered() {
        let rows = rows(Rect::new(0, 0, 60, 20));
        assert_eq!(rows[0].trim(), "");
        assert_eq!(rows[1].trim(), "");
        assert!(rows[2].starts_with("          ┌"));
        assert!(rows[2].ends_with("┐          "));
        assert!(rows[17].starts_with("          └"));
        assert_eq!(rows[18].trim(), "");
    }
}
