use crate::{
    audio::{commands::RequestId, traits::HandleId},
    catalog::model::Track,
};

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    FetchPopular,
    Search { seq: u64, query: String },

    // Events
    PopularFetched(Vec<Track>),
    SearchResults { seq: u64, tracks: Vec<Track> },
    PreviewReady(RequestId),
    PlaybackFinished(HandleId),
}
