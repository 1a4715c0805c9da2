use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget},
};

use crate::util::colors;

/// Title line with a dimmer subtitle under it.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::styled(
                self.title,
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(self.subtitle, Style::default().fg(colors::NEUTRAL)),
        ]);
        Paragraph::new(text).render(area, buf);
    }
}
