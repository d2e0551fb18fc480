//! Storage layer for quizlink
//!
//! PostgreSQL persistence for the `user_responses` table, opened one connection
//! per operation, plus an in-memory backend with identical semantics.

mod backend;
mod connection;
mod error;
mod memory;
mod pg_storage;
mod schema;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use connection::ConnectionProvider;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_storage::PgStorage;
pub use traits::UserResponseStore;
