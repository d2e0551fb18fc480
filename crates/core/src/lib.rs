//! Core types for quizlink
//!
//! Domain types and payload parsing shared by the storage, service and HTTP crates.

mod constants;
mod env_config;
mod error;
mod json_utils;
mod profile;
mod quiz_event;
mod user_response;

pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use json_utils::*;
pub use profile::*;
pub use quiz_event::*;
pub use user_response::*;
