use flume::Sender;
use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
    style::Style,
    widgets::{ListState, Paragraph},
};

use crate::{
    audio::{
        commands::{RequestId, SessionEvent},
        session::PlaybackSession,
        state::PlaybackState,
        traits::{AudioBackend, HandleId},
    },
    catalog::model::Track,
    event::events::Event,
    ui::{
        components::{spinner::Spinner, track_list::TrackList},
        traits::Action,
    },
    util::colors,
};

/// Result list plus the playback session behind it, shared by the
/// Discover and Search tabs.
pub struct TrackScreen<B: AudioBackend> {
    tracks: Vec<Track>,
    list_state: ListState,
    session: PlaybackSession<B>,
    loading: bool,
}

impl<B: AudioBackend> TrackScreen<B> {
    pub fn new(backend: B, event_tx: Sender<Event>) -> Self {
        Self {
            tracks: Vec::new(),
            list_state: ListState::default(),
            session: PlaybackSession::new(backend, event_tx),
            loading: false,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn state(&self) -> PlaybackState {
        self.session.state()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Swaps in a fresh result set. Playback of a track that is no longer
    /// listed keeps going until it ends or is replaced.
    pub fn replace_results(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.loading = false;
        self.list_state
            .select(if self.tracks.is_empty() { None } else { Some(0) });
    }

    pub fn select_next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let last = self.tracks.len() - 1;
        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.tracks.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.tracks.is_empty() {
            self.list_state.select(Some(self.tracks.len() - 1));
        }
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.list_state.selected().and_then(|i| self.tracks.get(i))
    }

    pub fn toggle_selected(&mut self) {
        let Some(track) = self.selected_track().cloned() else {
            return;
        };
        self.session.apply(SessionEvent::UserToggle(track));
    }

    pub fn on_preview_ready(&mut self, request: RequestId) {
        self.session.apply(SessionEvent::PreviewReady(request));
    }

    pub fn on_playback_finished(&mut self, handle: HandleId) {
        self.session.apply(SessionEvent::PlaybackFinished(handle));
    }

    pub fn shutdown(&mut self) {
        self.session.shutdown();
    }

    pub fn handle_navigation(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => return None,
        }
        Some(Action::None)
    }

    pub fn render_results(
        &mut self,
        f: &mut Frame,
        area: Rect,
        loading_label: &str,
        empty_label: &str,
    ) {
        if self.loading {
            let spinner = Spinner::default()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label(loading_label);
            f.render_widget(spinner, area);
            return;
        }

        if self.tracks.is_empty() {
            let message = Paragraph::new(empty_label)
                .style(Style::default().fg(colors::NEUTRAL))
                .centered();
            f.render_widget(message, area);
            return;
        }

        let list = TrackList::new(&self.tracks, self.state());
        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::testing::{Op, RecordingBackend, next_ready, track};
    use flume::Receiver;
    use ratatui::crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_with(
        tracks: Vec<Track>,
    ) -> (TrackScreen<RecordingBackend>, RecordingBackend, Receiver<Event>) {
        let backend = RecordingBackend::default();
        let (event_tx, event_rx) = flume::unbounded();
        let mut screen = TrackScreen::new(backend.clone(), event_tx);
        screen.replace_results(tracks);
        (screen, backend, event_rx)
    }

    async fn settle(screen: &mut TrackScreen<RecordingBackend>, rx: &Receiver<Event>) {
        let request = next_ready(rx).await;
        screen.on_preview_ready(request);
    }

    #[test]
    fn replacing_results_resets_selection_and_loading() {
        let (mut screen, _, _rx) = screen_with(vec![track(1, "A"), track(2, "B")]);
        screen.select_next();
        screen.set_loading(true);

        screen.replace_results(vec![track(3, "C")]);
        assert_eq!(screen.selected(), Some(0));
        assert!(!screen.is_loading());

        screen.replace_results(Vec::new());
        assert_eq!(screen.selected(), None);
        assert!(screen.selected_track().is_none());
    }

    #[test]
    fn selection_is_clamped_to_the_list() {
        let (mut screen, _, _rx) = screen_with(vec![track(1, "A"), track(2, "B")]);

        screen.select_previous();
        assert_eq!(screen.selected(), Some(0));

        screen.select_next();
        screen.select_next();
        assert_eq!(screen.selected(), Some(1));

        screen.select_first();
        assert_eq!(screen.selected(), Some(0));
        screen.select_last();
        assert_eq!(screen.selected(), Some(1));
    }

    #[tokio::test]
    async fn enter_toggles_the_selected_row() {
        let (mut screen, backend, rx) = screen_with(vec![track(1, "A"), track(2, "B")]);

        screen.handle_navigation(key(KeyCode::Down));
        screen.handle_navigation(key(KeyCode::Enter));
        assert_eq!(screen.state(), PlaybackState::Loading(2));

        settle(&mut screen, &rx).await;
        assert_eq!(screen.state(), PlaybackState::Playing(2));

        screen.handle_navigation(key(KeyCode::Char(' ')));
        assert_eq!(screen.state(), PlaybackState::Idle);
        assert_eq!(backend.live(), 0);
    }

    #[tokio::test]
    async fn keys_still_work_while_a_preview_loads() {
        let (mut screen, backend, _rx) = screen_with(vec![track(1, "A"), track(2, "B")]);
        backend.stall("https://cdn.example/1.mp3");

        screen.handle_navigation(key(KeyCode::Enter));
        tokio::task::yield_now().await;

        assert_eq!(screen.handle_navigation(key(KeyCode::Char('j'))), Some(Action::None));
        assert_eq!(screen.selected(), Some(1));
        assert_eq!(screen.state(), PlaybackState::Loading(1));
    }

    #[tokio::test]
    async fn playing_another_row_releases_the_first() {
        let (mut screen, backend, rx) = screen_with(vec![track(1, "A"), track(2, "B")]);

        screen.toggle_selected();
        settle(&mut screen, &rx).await;
        screen.select_next();
        screen.toggle_selected();
        settle(&mut screen, &rx).await;

        let ops = backend.ops();
        assert!(matches!(ops[1], Op::Release(_)));
        assert!(matches!(ops[2], Op::Acquire(ref url, _) if url.ends_with("/2.mp3")));
        assert_eq!(backend.max_live(), 1);
        assert_eq!(screen.state(), PlaybackState::Playing(2));
    }

    #[tokio::test]
    async fn toggling_an_empty_list_does_nothing() {
        let (mut screen, backend, _rx) = screen_with(Vec::new());

        assert_eq!(
            screen.handle_navigation(key(KeyCode::Enter)),
            Some(Action::None)
        );
        tokio::task::yield_now().await;
        assert!(backend.ops().is_empty());
        assert_eq!(screen.state(), PlaybackState::Idle);
    }

    #[tokio::test]
    async fn finish_notification_clears_the_marker() {
        let (mut screen, backend, rx) = screen_with(vec![track(1, "A")]);

        screen.toggle_selected();
        settle(&mut screen, &rx).await;
        screen.on_playback_finished(backend.handle_for("https://cdn.example/1.mp3"));

        assert_eq!(screen.state(), PlaybackState::Idle);
    }

    #[tokio::test]
    async fn shutdown_releases_playback() {
        let (mut screen, backend, rx) = screen_with(vec![track(1, "A")]);

        screen.toggle_selected();
        settle(&mut screen, &rx).await;
        screen.shutdown();

        assert_eq!(backend.live(), 0);
    }

    #[tokio::test]
    async fn unknown_keys_are_not_consumed() {
        let (mut screen, _, _rx) = screen_with(vec![track(1, "A")]);

        assert_eq!(screen.handle_navigation(key(KeyCode::Char('x'))), None);
    }
}
