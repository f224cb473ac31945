//! Errors raised while querying the CMS

use std::path::PathBuf;

/// A failed CMS query.
///
/// A missing document is never an error; it surfaces as an empty result.
#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("request to CMS failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CMS responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read fixture {path:?}: {source}")]
    Fixture {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type CmsResult<T> = Result<T, CmsError>;
