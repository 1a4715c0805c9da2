use std::{
    io::Cursor,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use async_trait::async_trait;
use flume::Sender;
use reqwest::Client;
use rodio::{Decoder, Sink, mixer::Mixer};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{
    audio::{
        config::AudioConfig,
        error::AudioError,
        traits::{AudioBackend, HandleId, PreviewHandle},
    },
    event::events::Event,
};

/// Plays previews through a shared rodio mixer, one sink per handle.
///
/// Clones share the mixer and the handle counter, so handle ids stay unique
/// across every screen that owns a clone.
#[derive(Clone)]
pub struct RodioBackend {
    mixer: Mixer,
    http_client: Client,
    event_tx: Sender<Event>,
    config: AudioConfig,
    next_id: Arc<AtomicU64>,
}

pub struct RodioHandle {
    id: HandleId,
    sink: Arc<Sink>,
    watcher: JoinHandle<()>,
}

impl PreviewHandle for RodioHandle {
    fn id(&self) -> HandleId {
        self.id
    }
}

impl RodioBackend {
    pub fn new(
        mixer: Mixer,
        event_tx: Sender<Event>,
        config: AudioConfig,
    ) -> Result<Self, AudioError> {
        let http_client = Client::builder()
            .timeout(config.download_timeout())
            .build()
            .map_err(|e| AudioError::FetchError(e.to_string()))?;

        Ok(Self {
            mixer,
            http_client,
            event_tx,
            config,
            next_id: Arc::new(AtomicU64::new(1)),
        })
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, AudioError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AudioError::FetchError(e.to_string()))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AudioError::FetchError(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl AudioBackend for RodioBackend {
    type Handle = RodioHandle;

    async fn acquire(&mut self, url: &str) -> Result<RodioHandle, AudioError> {
        let start = Instant::now();
        let bytes = self.download(url).await?;
        let size = bytes.len();

        let source =
            Decoder::new(Cursor::new(bytes)).map_err(|e| AudioError::DecodingError(e.to_string()))?;

        let sink = Arc::new(Sink::connect_new(&self.mixer));
        sink.set_volume(self.config.gain());
        sink.append(source);

        let id = HandleId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let watcher = watch_until_finished(
            id,
            sink.clone(),
            self.event_tx.clone(),
            self.config.finish_poll(),
        );

        info!(
            handle = id.0,
            bytes = size,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "preview_acquired"
        );

        Ok(RodioHandle { id, sink, watcher })
    }

    fn release(&mut self, handle: RodioHandle) {
        handle.watcher.abort();
        handle.sink.stop();
        debug!(handle = handle.id.0, "preview_released");
    }
}

fn watch_until_finished(
    id: HandleId,
    sink: Arc<Sink>,
    event_tx: Sender<Event>,
    poll: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(poll);
        loop {
            ticker.tick().await;

            if sink.empty() {
                debug!(handle = id.0, "preview_drained");
                let _ = event_tx.send(Event::PlaybackFinished(id));
                break;
            }
        }
    })
}
