use crate::{event::events::Event, ui::context::AppContext};
use async_trait::async_trait;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    None,
}

/// One tab of the application.
///
/// `handle_input` returns `None` when the view did not consume the key, so
/// the global bindings get a chance at it.
#[async_trait]
pub trait View: Send {
    fn title(&self) -> &str;
    fn render(&mut self, f: &mut Frame, area: Rect);
    async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action>;
    async fn on_event(&mut self, _event: &Event, _ctx: &AppContext) {}
    fn on_mount(&mut self, _ctx: &AppContext) {}
    fn on_unmount(&mut self) {}
}
