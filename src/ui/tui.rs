use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;

use crossterm::event::EventStream;
use flume::{Receiver, Sender};
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::{
    cursor,
    event::{Event as CrosstermEvent, KeyEvent, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend as Backend, crossterm};
use tokio::task::JoinHandle;

const TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Clone, Debug)]
pub enum TerminalEvent {
    Tick,
    Key(KeyEvent),
    Resize(u16, u16),
    Closed,
}

pub struct Tui {
    terminal: ratatui::Terminal<Backend<std::io::Stdout>>,
    event_rx: Receiver<TerminalEvent>,
    event_tx: Sender<TerminalEvent>,
    reader: Option<JoinHandle<()>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(std::io::stdout()))?;
        let (event_tx, event_rx) = flume::unbounded();

        Ok(Self {
            terminal,
            event_rx,
            event_tx,
            reader: None,
        })
    }

    fn start(&mut self) {
        let event_tx = self.event_tx.clone();
        self.reader = Some(tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut ticker = tokio::time::interval(TICK_RATE);

            loop {
                let tick = ticker.tick();
                let next = reader.next().fuse();

                let event = tokio::select! {
                    _ = tick => TerminalEvent::Tick,
                    maybe = next => match maybe {
                        Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                            TerminalEvent::Key(key)
                        }
                        Some(Ok(CrosstermEvent::Resize(w, h))) => TerminalEvent::Resize(w, h),
                        Some(Ok(_)) => continue,
                        Some(Err(_)) | None => TerminalEvent::Closed,
                    },
                };

                let closed = matches!(event, TerminalEvent::Closed);
                if event_tx.send_async(event).await.is_err() || closed {
                    break;
                }
            }
        }));
    }

    pub fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(std::io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.terminal.flush()?;
            Self::restore()?;
        }
        Ok(())
    }

    pub fn restore() -> Result<()> {
        crossterm::execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        crossterm::terminal::disable_raw_mode()?;
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub async fn next(&self) -> Option<TerminalEvent> {
        self.event_rx.recv_async().await.ok()
    }
}

impl Deref for Tui {
    type Target = ratatui::Terminal<Backend<std::io::Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}
