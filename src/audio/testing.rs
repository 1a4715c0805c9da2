use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use flume::Receiver;

use crate::{
    audio::{
        commands::RequestId,
        error::AudioError,
        traits::{AudioBackend, HandleId, PreviewHandle},
    },
    catalog::model::{Track, TrackId},
    event::events::Event,
};

pub fn track(id: TrackId, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        artist: "Artist".to_string(),
        cover_url: format!("https://img.example/{id}.jpg"),
        preview_url: format!("https://cdn.example/{id}.mp3"),
        duration: 30,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Acquire(String, HandleId),
    Release(HandleId),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    live: usize,
    max_live: usize,
    next_id: u64,
    failing: HashSet<String>,
    stalled: HashSet<String>,
}

/// Audio backend that records acquire/release calls instead of playing.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    inner: Arc<Mutex<Recorder>>,
}

pub struct FakeHandle(HandleId);

impl PreviewHandle for FakeHandle {
    fn id(&self) -> HandleId {
        self.0
    }
}

impl RecordingBackend {
    pub fn fail_on(&self, url: &str) {
        self.inner.lock().unwrap().failing.insert(url.to_string());
    }

    /// Makes every acquire of `url` hang until its task is aborted.
    pub fn stall(&self, url: &str) {
        self.inner.lock().unwrap().stalled.insert(url.to_string());
    }

    pub fn ops(&self) -> Vec<Op> {
        self.inner.lock().unwrap().ops.clone()
    }

    pub fn live(&self) -> usize {
        self.inner.lock().unwrap().live
    }

    pub fn max_live(&self) -> usize {
        self.inner.lock().unwrap().max_live
    }

    /// Handle of the latest acquire for `url`.
    pub fn handle_for(&self, url: &str) -> HandleId {
        self.ops()
            .into_iter()
            .rev()
            .find_map(|op| match op {
                Op::Acquire(u, id) if u == url => Some(id),
                _ => None,
            })
            .expect("url was never acquired")
    }
}

#[async_trait]
impl AudioBackend for RecordingBackend {
    type Handle = FakeHandle;

    async fn acquire(&mut self, url: &str) -> Result<FakeHandle, AudioError> {
        let stalled = self.inner.lock().unwrap().stalled.contains(url);
        if stalled {
            std::future::pending::<()>().await;
        }

        let mut recorder = self.inner.lock().unwrap();
        if recorder.failing.contains(url) {
            return Err(AudioError::DecodingError(format!("cannot decode {url}")));
        }

        recorder.next_id += 1;
        let id = HandleId(recorder.next_id);
        recorder.live += 1;
        recorder.max_live = recorder.max_live.max(recorder.live);
        recorder.ops.push(Op::Acquire(url.to_string(), id));

        Ok(FakeHandle(id))
    }

    fn release(&mut self, handle: FakeHandle) {
        let mut recorder = self.inner.lock().unwrap();
        recorder.live -= 1;
        recorder.ops.push(Op::Release(handle.0));
    }
}

/// Waits for the next acquire to land, skipping unrelated events.
pub async fn next_ready(rx: &Receiver<Event>) -> RequestId {
    let wait = async {
        loop {
            match rx.recv_async().await {
                Ok(Event::PreviewReady(request)) => return request,
                Ok(_) => {}
                Err(_) => panic!("event queue closed"),
            }
        }
    };

    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("no preview became ready")
}
