//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use quizlink_core::{ProfilePayload, QuizResult, UpsertOutcome, UserResponse};

use crate::connection::ConnectionProvider;
use crate::error::StorageError;
use crate::traits::UserResponseStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => {
                <crate::pg_storage::PgStorage as UserResponseStore>::$method(s, $($arg),*).await
            },
            StorageBackend::Memory(s) => {
                <crate::memory::MemoryStorage as UserResponseStore>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Debug)]
pub enum StorageBackend {
    Postgres(crate::pg_storage::PgStorage),
    Memory(crate::memory::MemoryStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_postgres(database_url: Option<String>) -> Self {
        Self::Postgres(crate::pg_storage::PgStorage::new(ConnectionProvider::new(database_url)))
    }

    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::memory::MemoryStorage::new())
    }
}

#[async_trait]
impl UserResponseStore for StorageBackend {
    async fn init_schema(&self) -> Result<(), StorageError> {
        dispatch!(self, init_schema())
    }

    async fn insert_profile(&self, profile: &ProfilePayload) -> Result<i32, StorageError> {
        dispatch!(self, insert_profile(profile))
    }

    async fn upsert_quiz_result(&self, result: &QuizResult) -> Result<UpsertOutcome, StorageError> {
        dispatch!(self, upsert_quiz_result(result))
    }

    async fn get_user_response(&self, id: i32) -> Result<Option<UserResponse>, StorageError> {
        dispatch!(self, get_user_response(id))
    }

    async fn find_by_facebook_id(
        &self,
        facebook_id: &str,
    ) -> Result<Vec<UserResponse>, StorageError> {
        dispatch!(self, find_by_facebook_id(facebook_id))
    }
}
