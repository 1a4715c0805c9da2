use crate::catalog::model::TrackId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    /// The preview is still downloading.
    Loading(TrackId),
    Playing(TrackId),
}

impl PlaybackState {
    pub fn is_playing(&self, track: TrackId) -> bool {
        *self == Self::Playing(track)
    }

    pub fn is_loading(&self, track: TrackId) -> bool {
        *self == Self::Loading(track)
    }
}
