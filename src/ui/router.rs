use crate::event::events::Event;
use crate::ui::context::AppContext;
use crate::ui::traits::{Action, View};
use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

/// Fixed set of tabs. Every tab stays mounted until the app shuts down.
pub struct Router {
    tabs: Vec<Box<dyn View>>,
    active: usize,
}

impl Router {
    pub fn new(tabs: Vec<Box<dyn View>>) -> Self {
        Self { tabs, active: 0 }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.title()).collect()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn select(&mut self, index: usize) {
        if index < self.tabs.len() {
            self.active = index;
        }
    }

    pub fn next(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + 1) % self.tabs.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.tabs.is_empty() {
            self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    pub fn mount(&mut self, ctx: &AppContext) {
        for tab in &mut self.tabs {
            tab.on_mount(ctx);
        }
    }

    pub fn unmount(&mut self) {
        for tab in &mut self.tabs {
            tab.on_unmount();
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if let Some(view) = self.tabs.get_mut(self.active) {
            view.render(f, area);
        }
    }

    pub async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action> {
        match self.tabs.get_mut(self.active) {
            Some(view) => view.handle_input(key, ctx).await,
            None => None,
        }
    }

    /// Every tab sees every event; each one ignores what is not addressed to it.
    pub async fn on_event(&mut self, event: &Event, ctx: &AppContext) {
        for view in &mut self.tabs {
            view.on_event(event, ctx).await;
        }
    }
}
