use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AudioError {
    #[error("Audio output device error: {0}")]
    DeviceError(String),

    #[error("Preview download failed: {0}")]
    FetchError(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),
}
