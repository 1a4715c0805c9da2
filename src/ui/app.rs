use std::sync::Arc;

use flume::Receiver;
use rodio::OutputStream;
use tracing::info;

use crate::{
    audio::{playback::RodioBackend, util::open_output_stream},
    catalog::CatalogClient,
    config::Config,
    event::events::Event,
    ui::{
        context::AppContext,
        layout::AppLayout,
        message::AppMessage,
        router::Router,
        traits::View,
        tui::Tui,
        util::handler::EventHandler,
        views::{Discover, Favorites, Search},
    },
    util::task::TaskManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub router: Router,
    pub task_manager: TaskManager,
    pub should_quit: bool,
    // Declared last so every sink is gone before the device closes.
    _stream: OutputStream,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();
        let catalog = Arc::new(CatalogClient::new(&config.catalog)?);

        let stream = open_output_stream()?;
        let backend = RodioBackend::new(stream.mixer().clone(), event_tx.clone(), config.audio)?;

        let tabs: Vec<Box<dyn View>> = vec![
            Box::new(Discover::new(backend.clone(), event_tx.clone())),
            Box::new(Search::new(backend, event_tx.clone())),
            Box::new(Favorites),
        ];

        Ok(Self {
            event_rx,
            ctx: AppContext { catalog, event_tx },
            router: Router::new(tabs),
            task_manager: TaskManager::new(),
            should_quit: false,
            _stream: stream,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.router.mount(&self.ctx);
        info!("app_started");

        while !self.should_quit {
            tui.draw(|f| AppLayout::new(&mut self.router).render(f))?;
            EventHandler::handle_events(self, &tui).await?;
        }

        self.shutdown();
        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::NextTab => self.router.next(),
            AppMessage::PreviousTab => self.router.previous(),
            AppMessage::SelectTab(index) => self.router.select(index),
        }
    }

    fn shutdown(&mut self) {
        self.task_manager.abort_all();
        self.router.unmount();
        info!("app_stopped");
    }
}
