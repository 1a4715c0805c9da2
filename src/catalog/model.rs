//! Track records and the validated decode of catalog responses.
//!
//! The service answers with an envelope whose `data` field holds track-like
//! objects. Each object is decoded on its own; anything that does not yield
//! a complete [`Track`] is dropped instead of failing the whole result set.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::catalog::error::CatalogError;

pub type TrackId = u64;

/// A single playable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    pub preview_url: String,
    /// Full track length in seconds, not the preview length.
    pub duration: u32,
}

impl Track {
    pub fn format_duration(&self) -> String {
        format_duration(self.duration)
    }
}

/// Renders seconds as `m:ss`.
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Vec<Value>>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: i64,
}

#[derive(Debug, Deserialize)]
struct WireTrack {
    id: Option<u64>,
    title: Option<String>,
    preview: Option<String>,
    duration: Option<u32>,
    artist: Option<WireArtist>,
    album: Option<WireAlbum>,
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireAlbum {
    cover_medium: Option<String>,
}

impl WireTrack {
    fn into_track(self) -> Option<Track> {
        // Unavailable tracks come back with an empty preview.
        let preview_url = self.preview.filter(|p| !p.is_empty())?;

        Some(Track {
            id: self.id?,
            title: self.title?,
            artist: self.artist?.name?,
            cover_url: self.album?.cover_medium?,
            preview_url,
            duration: self.duration?,
        })
    }
}

fn decode_record(record: Value) -> Option<Track> {
    serde_json::from_value::<WireTrack>(record)
        .ok()
        .and_then(WireTrack::into_track)
}

/// Decodes a response body into an ordered result set.
pub fn decode_result_set(body: &[u8]) -> Result<Vec<Track>, CatalogError> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if let Some(error) = envelope.error {
        return Err(CatalogError::Service {
            kind: error.kind,
            message: error.message,
            code: error.code,
        });
    }

    let records = envelope.data.unwrap_or_default();
    let total = records.len();

    let tracks: Vec<Track> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let track = decode_record(record);
            if track.is_none() {
                debug!(index, "catalog_record_dropped");
            }
            track
        })
        .collect();

    debug!(total, kept = tracks.len(), "catalog_result_set_decoded");

    Ok(tracks)
}
