use crate::{audio::traits::HandleId, catalog::model::Track};

/// Identifies one acquire started by a playback session. Unique for the
/// lifetime of the process, so a completion broadcast to every screen only
/// lands in the session that asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

/// Everything that can move a playback session, in the order it arrived.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    UserToggle(Track),
    PreviewReady(RequestId),
    PlaybackFinished(HandleId),
}
