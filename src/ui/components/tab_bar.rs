use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::util::colors;

pub struct TabBar<'a> {
    titles: Vec<&'a str>,
    selected_index: usize,
}

impl<'a> TabBar<'a> {
    pub fn new(titles: Vec<&'a str>, selected_index: usize) -> Self {
        Self {
            titles,
            selected_index,
        }
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.titles.len() * 2);
        for (i, title) in self.titles.iter().enumerate() {
            let style = if i == self.selected_index {
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, title), style));
            spans.push(Span::raw(" "));
        }

        Line::from(spans).render(area, buf);
    }
}
