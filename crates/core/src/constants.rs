//! Shared constants for quizlink.

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 5000;

/// Bind address used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Lead-form question whose first answer carries the Facebook ID (compared lowercased).
pub const FACEBOOK_ID_QUESTION: &str = "facebook id";
