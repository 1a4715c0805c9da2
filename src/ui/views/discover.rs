use async_trait::async_trait;
use flume::Sender;
use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    audio::traits::AudioBackend,
    event::events::Event,
    ui::{
        components::header::Header,
        context::AppContext,
        traits::{Action, View},
        views::track_screen::TrackScreen,
    },
};

pub struct Discover<B: AudioBackend> {
    screen: TrackScreen<B>,
}

impl<B: AudioBackend> Discover<B> {
    pub fn new(backend: B, event_tx: Sender<Event>) -> Self {
        Self {
            screen: TrackScreen::new(backend, event_tx),
        }
    }
}

#[async_trait]
impl<B: AudioBackend + 'static> View for Discover<B> {
    fn title(&self) -> &str {
        "Discover"
    }

    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        f.render_widget(
            Header::new("Discover Music", "Popular tracks right now"),
            chunks[0],
        );
        self.screen
            .render_results(f, chunks[1], "Loading popular tracks...", "No tracks");
    }

    async fn handle_input(&mut self, key: KeyEvent, _ctx: &AppContext) -> Option<Action> {
        self.screen.handle_navigation(key)
    }

    async fn on_event(&mut self, event: &Event, _ctx: &AppContext) {
        match event {
            Event::PopularFetched(tracks) => self.screen.replace_results(tracks.clone()),
            Event::PreviewReady(request) => self.screen.on_preview_ready(*request),
            Event::PlaybackFinished(handle) => self.screen.on_playback_finished(*handle),
            _ => {}
        }
    }

    fn on_mount(&mut self, ctx: &AppContext) {
        self.screen.set_loading(true);
        ctx.send(Event::FetchPopular);
    }

    fn on_unmount(&mut self) {
        self.screen.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        audio::{
            state::PlaybackState,
            testing::{RecordingBackend, next_ready, track},
        },
        ui::context::test_context,
    };
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn mounting_requests_popular_tracks() {
        let (ctx, rx) = test_context();
        let mut discover = Discover::new(RecordingBackend::default(), ctx.event_tx.clone());

        discover.on_mount(&ctx);

        assert!(matches!(rx.try_recv(), Ok(Event::FetchPopular)));
        assert!(discover.screen.is_loading());
    }

    #[tokio::test]
    async fn popular_tracks_replace_the_list_and_play_on_enter() {
        let (ctx, rx) = test_context();
        let backend = RecordingBackend::default();
        let mut discover = Discover::new(backend.clone(), ctx.event_tx.clone());
        discover.on_mount(&ctx);

        discover
            .on_event(&Event::PopularFetched(vec![track(5, "Hit")]), &ctx)
            .await;
        discover.handle_input(key(KeyCode::Enter), &ctx).await;
        let ready = next_ready(&rx).await;
        discover.on_event(&Event::PreviewReady(ready), &ctx).await;

        assert!(!discover.screen.is_loading());
        assert_eq!(discover.screen.state(), PlaybackState::Playing(5));

        let handle = backend.handle_for("https://cdn.example/5.mp3");
        discover
            .on_event(&Event::PlaybackFinished(handle), &ctx)
            .await;
        assert_eq!(discover.screen.state(), PlaybackState::Idle);
    }

    #[tokio::test]
    async fn slow_preview_does_not_hold_up_input() {
        let (ctx, rx) = test_context();
        let backend = RecordingBackend::default();
        backend.stall("https://cdn.example/1.mp3");
        let mut discover = Discover::new(backend.clone(), ctx.event_tx.clone());
        discover
            .on_event(&Event::PopularFetched(vec![track(1, "A"), track(2, "B")]), &ctx)
            .await;

        let handled = tokio::time::timeout(
            Duration::from_millis(500),
            discover.handle_input(key(KeyCode::Enter), &ctx),
        )
        .await;
        assert!(matches!(handled, Ok(Some(Action::None))));

        // Picking another row while the first is still loading.
        discover.handle_input(key(KeyCode::Down), &ctx).await;
        discover.handle_input(key(KeyCode::Enter), &ctx).await;
        assert_eq!(discover.screen.state(), PlaybackState::Loading(2));

        let ready = next_ready(&rx).await;
        discover.on_event(&Event::PreviewReady(ready), &ctx).await;

        assert_eq!(discover.screen.state(), PlaybackState::Playing(2));
        assert_eq!(backend.ops().len(), 1);
        assert_eq!(backend.live(), 1);
    }

    #[tokio::test]
    async fn search_results_are_not_for_discover() {
        let (ctx, _rx) = test_context();
        let mut discover = Discover::new(RecordingBackend::default(), ctx.event_tx.clone());

        discover
            .on_event(
                &Event::SearchResults {
                    seq: 1,
                    tracks: vec![track(1, "A")],
                },
                &ctx,
            )
            .await;

        assert!(discover.screen.tracks().is_empty());
    }

    #[tokio::test]
    async fn unmounting_stops_playback() {
        let (ctx, rx) = test_context();
        let backend = RecordingBackend::default();
        let mut discover = Discover::new(backend.clone(), ctx.event_tx.clone());
        discover
            .on_event(&Event::PopularFetched(vec![track(1, "A")]), &ctx)
            .await;
        discover.handle_input(key(KeyCode::Char(' ')), &ctx).await;
        let ready = next_ready(&rx).await;
        discover.on_event(&Event::PreviewReady(ready), &ctx).await;

        discover.on_unmount();

        assert_eq!(backend.live(), 0);
    }
}
