//! Storage backend trait abstraction.

pub mod user_response;

pub use user_response::UserResponseStore;
