use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const FOCUSED_BORDER_STYLE: Style = BASE_STYLE.fg(Color::LightBlue);

pub(crate) mod field {
    use super::*;

    pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const CURSOR_STYLE: Style = BASE_STYLE.add_modifier(Modifier::REVERSED);
}

pub(crate) mod calendar {
    use super::*;

    pub(crate) const SHORTCUT_STYLE: Style = BASE_STYLE.fg(Color::Gray);

    pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE
        .fg(Color::LightBlue)
        .add_modifier(Modifier::BOLD);

    pub(crate) const OTHER_MONTH_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const TODAY_MODIFIER: Modifier = Modifier::BOLD;

    pub(crate) const SELECTED_STYLE: Style = Style::new().fg(Color::White).bg(Color::Blue);

    pub(crate) const CURSOR_MODIFIER: Modifier = Modifier::UNDERLINED;
}
