use crate::audio::error::AudioError;
use async_trait::async_trait;

/// Identifies one acquired handle for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(pub u64);

pub trait PreviewHandle: Send + 'static {
    fn id(&self) -> HandleId;
}

/// The audio subsystem as seen by a playback session.
///
/// `acquire` loads the preview behind `url` and starts it right away. The
/// session runs it on a spawned task working on its own clone, so clones must
/// drive the same output. When a handle plays to its end the backend reports
/// it as [`Event::PlaybackFinished`](crate::event::events::Event::PlaybackFinished)
/// carrying the handle's id.
#[async_trait]
pub trait AudioBackend: Clone + Send + 'static {
    type Handle: PreviewHandle;

    async fn acquire(&mut self, url: &str) -> Result<Self::Handle, AudioError>;
    fn release(&mut self, handle: Self::Handle);
}
