use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Style,
    symbols::border,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    ui::{components::tab_bar::TabBar, router::Router},
    util::colors,
};

const KEY_HINTS: &str =
    " tab/1-3 switch  j/k move  enter/space play/stop  / search  esc leave field  q quit";

pub struct AppLayout<'a> {
    pub router: &'a mut Router,
}

impl<'a> AppLayout<'a> {
    pub fn new(router: &'a mut Router) -> Self {
        Self { router }
    }

    pub fn render(self, f: &mut Frame) {
        let area = f.area();
        f.buffer_mut()
            .set_style(area, Style::new().bg(colors::BACKGROUND));

        let [tabs_area, content_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        f.render_widget(
            TabBar::new(self.router.titles(), self.router.active_index()),
            tabs_area,
        );

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(" tunepeek ")
            .title_alignment(Alignment::Center);
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.router.render(f, content_inner);

        f.render_widget(
            Paragraph::new(KEY_HINTS).style(Style::default().fg(colors::NEUTRAL)),
            hints_area,
        );
    }
}
