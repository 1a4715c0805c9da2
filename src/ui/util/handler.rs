use ratatui::crossterm::event::KeyEvent;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
    util::task::TaskSlot,
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains the app queue.
    pub async fn handle_events(app: &mut App, tui: &Tui) -> color_eyre::Result<()> {
        match tui.next().await {
            Some(TerminalEvent::Key(key)) => Self::handle_key_event(app, key).await,
            Some(TerminalEvent::Tick) | Some(TerminalEvent::Resize(..)) => {}
            Some(TerminalEvent::Closed) | None => app.update(AppMessage::Quit),
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
        }

        Ok(())
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::FetchPopular => {
                let catalog = app.ctx.catalog.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    TaskSlot::Popular,
                    tokio::spawn(async move {
                        let tracks = catalog.popular().await;
                        let _ = tx.send(Event::PopularFetched(tracks));
                    }),
                );
            }
            Event::Search { seq, query } => {
                let catalog = app.ctx.catalog.clone();
                let tx = app.ctx.event_tx.clone();

                app.task_manager.spawn(
                    TaskSlot::Search,
                    tokio::spawn(async move {
                        let tracks = catalog.search(&query).await;
                        let _ = tx.send(Event::SearchResults { seq, tracks });
                    }),
                );
            }
            evt => app.router.on_event(&evt, &app.ctx).await,
        }
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        match app.router.handle_input(key, &app.ctx).await {
            Some(Action::Quit) => app.update(AppMessage::Quit),
            Some(Action::None) => {}
            None => {
                if let Some(msg) = InputHandler::handle_key(key) {
                    app.update(msg);
                }
            }
        }
    }
}
