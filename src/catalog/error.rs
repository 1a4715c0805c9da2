use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog service error {code} ({kind}): {message}")]
    Service {
        kind: String,
        message: String,
        code: i64,
    },

    #[error("Invalid catalog url: {0}")]
    InvalidUrl(String),
}
