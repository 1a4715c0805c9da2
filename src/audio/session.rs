//! Single-handle playback session.
//!
//! A session is idle, loading one track, or playing one track. Switching
//! tracks always releases the live handle before a new acquire starts, so a
//! session never holds two handles at once.
//!
//! Acquiring runs on a spawned task so the UI loop keeps drawing while a
//! preview downloads. The task hands its result back through a oneshot and
//! posts [`Event::PreviewReady`] onto the app queue. User toggles, ready
//! notices and finish notices all arrive on that one queue, so transitions
//! need no locking.

use std::sync::atomic::{AtomicU64, Ordering};

use flume::Sender;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    audio::{
        commands::{RequestId, SessionEvent},
        error::AudioError,
        state::PlaybackState,
        traits::{AudioBackend, HandleId, PreviewHandle},
    },
    catalog::model::{Track, TrackId},
    event::events::Event,
};

static NEXT_REQUEST: AtomicU64 = AtomicU64::new(1);

struct ActivePreview<H> {
    track: TrackId,
    handle: H,
}

struct PendingPreview<H> {
    request: RequestId,
    track: TrackId,
    task: JoinHandle<()>,
    result: oneshot::Receiver<Result<H, AudioError>>,
}

pub struct PlaybackSession<B: AudioBackend> {
    backend: B,
    event_tx: Sender<Event>,
    // At most one of these is set.
    active: Option<ActivePreview<B::Handle>>,
    pending: Option<PendingPreview<B::Handle>>,
}

impl<B: AudioBackend> PlaybackSession<B> {
    pub fn new(backend: B, event_tx: Sender<Event>) -> Self {
        Self {
            backend,
            event_tx,
            active: None,
            pending: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if let Some(track) = self.playing() {
            return PlaybackState::Playing(track);
        }
        match &self.pending {
            Some(pending) => PlaybackState::Loading(pending.track),
            None => PlaybackState::Idle,
        }
    }

    pub fn playing(&self) -> Option<TrackId> {
        self.active.as_ref().map(|a| a.track)
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::UserToggle(track) => self.toggle(&track),
            SessionEvent::PreviewReady(request) => self.on_ready(request),
            SessionEvent::PlaybackFinished(handle) => self.on_finished(handle),
        }
    }

    /// Starts `track`, or stops it when it is the one already playing or
    /// loading. Returns before the preview is fetched.
    pub fn toggle(&mut self, track: &Track) {
        let previous = self.release_current();

        if previous == Some(track.id) {
            info!(track = track.id, "playback_stopped");
            return;
        }

        self.request(track);
    }

    fn request(&mut self, track: &Track) {
        let request = RequestId(NEXT_REQUEST.fetch_add(1, Ordering::Relaxed));
        let (result_tx, result_rx) = oneshot::channel();
        let mut backend = self.backend.clone();
        let event_tx = self.event_tx.clone();
        let url = track.preview_url.clone();

        let task = tokio::spawn(async move {
            let result = backend.acquire(&url).await;

            // The session gave up on this request before it landed.
            if let Err(unclaimed) = result_tx.send(result) {
                if let Ok(handle) = unclaimed {
                    debug!(request = request.0, handle = handle.id().0, "preview_unclaimed");
                    backend.release(handle);
                }
                return;
            }

            if event_tx.send(Event::PreviewReady(request)).is_err() {
                warn!(request = request.0, "event_queue_closed");
            }
        });

        debug!(track = track.id, request = request.0, "playback_requested");
        self.pending = Some(PendingPreview {
            request,
            track: track.id,
            task,
            result: result_rx,
        });
    }

    /// Takes over the handle of a finished acquire. Notices for requests
    /// that were cancelled or belong to another session are ignored.
    pub fn on_ready(&mut self, request: RequestId) {
        let is_pending = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.request == request);

        if !is_pending {
            debug!(request = request.0, "preview_ready_ignored");
            return;
        }
        let Some(mut pending) = self.pending.take() else {
            return;
        };

        match pending.result.try_recv() {
            Ok(Ok(handle)) => {
                info!(track = pending.track, handle = handle.id().0, "playback_started");
                self.active = Some(ActivePreview {
                    track: pending.track,
                    handle,
                });
            }
            Ok(Err(e)) => {
                warn!(track = pending.track, error = %e, "playback_acquire_failed");
            }
            Err(e) => {
                warn!(track = pending.track, error = %e, "playback_acquire_lost");
            }
        }
    }

    pub fn on_finished(&mut self, handle: HandleId) {
        let is_live = self
            .active
            .as_ref()
            .is_some_and(|active| active.handle.id() == handle);

        if !is_live {
            debug!(handle = handle.0, "playback_finish_ignored");
            return;
        }

        if let Some(track) = self.release_active() {
            info!(track, handle = handle.0, "playback_finished");
        }
    }

    /// Releases whatever is held or loading, regardless of state.
    pub fn shutdown(&mut self) {
        if let Some(track) = self.release_current() {
            info!(track, "playback_session_closed");
        }
    }

    fn release_current(&mut self) -> Option<TrackId> {
        let cancelled = self.cancel_pending();
        self.release_active().or(cancelled)
    }

    fn release_active(&mut self) -> Option<TrackId> {
        let active = self.active.take()?;
        self.backend.release(active.handle);
        Some(active.track)
    }

    /// Stops a pending acquire. A handle that already arrived is released
    /// here; one that arrives after `close` is released by the task itself.
    fn cancel_pending(&mut self) -> Option<TrackId> {
        let mut pending = self.pending.take()?;
        pending.task.abort();
        pending.result.close();

        if let Ok(Ok(handle)) = pending.result.try_recv() {
            debug!(track = pending.track, handle = handle.id().0, "preview_cancelled_late");
            self.backend.release(handle);
        }
        Some(pending.track)
    }
}

impl<B: AudioBackend> Drop for PlaybackSession<B> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
