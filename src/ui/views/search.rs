use async_trait::async_trait;
use flume::Sender;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::{
    audio::traits::AudioBackend,
    catalog::model::Track,
    event::events::Event,
    ui::{
        components::header::Header,
        context::AppContext,
        traits::{Action, View},
        views::track_screen::TrackScreen,
    },
    util::colors,
};

/// Search tab. Every edit of the query issues a new search.
///
/// Searches are numbered; a response is applied only when it answers the
/// latest query, so a slow earlier response cannot overwrite a newer list.
pub struct Search<B: AudioBackend> {
    screen: TrackScreen<B>,
    input: String,
    is_editing: bool,
    seq: u64,
}

impl<B: AudioBackend> Search<B> {
    pub fn new(backend: B, event_tx: Sender<Event>) -> Self {
        Self {
            screen: TrackScreen::new(backend, event_tx),
            input: String::new(),
            is_editing: true,
            seq: 0,
        }
    }

    /// Starts a search for the current input. Blank input clears the list
    /// on the spot and yields no request.
    fn next_query(&mut self) -> Option<Event> {
        self.seq += 1;

        if self.input.trim().is_empty() {
            self.screen.replace_results(Vec::new());
            return None;
        }

        self.screen.set_loading(true);
        Some(Event::Search {
            seq: self.seq,
            query: self.input.clone(),
        })
    }

    fn accept_results(&mut self, seq: u64, tracks: &[Track]) -> bool {
        if seq != self.seq {
            debug!(seq, latest = self.seq, "search_results_stale");
            return false;
        }
        self.screen.replace_results(tracks.to_vec());
        true
    }

    fn edit(&mut self, key: KeyEvent) -> Option<Option<Event>> {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
                Some(self.next_query())
            }
            KeyCode::Backspace => {
                self.input.pop();
                Some(self.next_query())
            }
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => {
                self.is_editing = false;
                Some(None)
            }
            _ => None,
        }
    }

    fn empty_label(&self) -> String {
        if self.input.trim().is_empty() {
            "Search for your favorite music".to_string()
        } else {
            format!("No tracks found for \"{}\"", self.input)
        }
    }
}

#[async_trait]
impl<B: AudioBackend + 'static> View for Search<B> {
    fn title(&self) -> &str {
        "Search"
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(area);

        f.render_widget(Header::new("Search Music", ""), chunks[0]);

        let border_style = if self.is_editing {
            Style::default().fg(colors::PRIMARY)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style);

        let input_line = if self.input.is_empty() {
            Line::styled(
                "Search for songs, artists...",
                Style::default().fg(colors::MUTED),
            )
        } else {
            Line::raw(self.input.as_str())
        };
        f.render_widget(Paragraph::new(input_line).block(input_block), chunks[1]);

        let empty_label = self.empty_label();
        self.screen
            .render_results(f, chunks[2], "Searching...", &empty_label);
    }

    async fn handle_input(&mut self, key: KeyEvent, ctx: &AppContext) -> Option<Action> {
        if self.is_editing {
            let outcome = self.edit(key)?;
            if let Some(event) = outcome {
                ctx.send(event);
            }
            return Some(Action::None);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.is_editing = true;
                Some(Action::None)
            }
            KeyCode::Up if self.screen.selected().is_none_or(|i| i == 0) => {
                self.is_editing = true;
                Some(Action::None)
            }
            _ => self.screen.handle_navigation(key),
        }
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::SearchResults { seq, tracks } => {
                self.accept_results(*seq, tracks);
            }
            Event::PreviewReady(request) => self.screen.on_preview_ready(*request),
            Event::PlaybackFinished(handle) => self.screen.on_playback_finished(*handle),
            _ => {}
        }
    }

    fn on_unmount(&mut self) {
        self.screen.shutdown();
    }
}
