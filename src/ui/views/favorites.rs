use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::Paragraph,
};

use crate::{
    ui::{
        components::header::Header,
        context::AppContext,
        traits::{Action, View},
    },
    util::colors,
};

/// Static empty state; nothing is ever stored.
#[derive(Default)]
pub struct Favorites;

#[async_trait]
impl View for Favorites {
    fn title(&self) -> &str {
        "Favorites"
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        f.render_widget(Header::new("Favorites", "Your liked tracks"), chunks[0]);

        let body = Text::from(vec![
            Line::styled(
                "No favorites yet",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Start exploring music and add tracks to your favorites",
                Style::default().fg(colors::NEUTRAL),
            ),
        ]);
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(chunks[1]);
        f.render_widget(Paragraph::new(body).centered(), middle);
    }

    async fn handle_input(&mut self, _key: KeyEvent, _ctx: &AppContext) -> Option<Action> {
        None
    }
}
