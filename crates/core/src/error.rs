use thiserror::Error;

/// Errors raised while decoding inbound payloads.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PayloadError {
    /// Body absent, not JSON, not an object, or an empty object.
    #[error("no data provided")]
    Empty,

    /// Tracked event without a usable Facebook ID answer.
    #[error("no Facebook ID found")]
    MissingFacebookId,

    /// `finished_at` present but not a recognised timestamp.
    #[error("invalid finished_at timestamp: {0}")]
    InvalidTimestamp(String),
}
