use thiserror::Error;

/// Failures at the data-acquisition boundary.
///
/// This is the only error class the engine can encounter; callers log it
/// and fall back to the prior (empty) collection rather than surfacing
/// an error state.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
