use thiserror::Error;

/// Failures a single run can hit. Configuration problems and upstream API
/// problems surface identically at the top level (exit 1), but stay distinct
/// types internally.
#[derive(Debug, Error)]
pub enum RelnotesError {
    #[error("{0}")]
    Config(String),

    #[error("GitHub Models API request failed. Status: {status}, Response: {body}")]
    Api { status: u16, body: String },

    #[error("GitHub Models API returned an unusable response (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },
}

pub type Result<T> = std::result::Result<T, RelnotesError>;
