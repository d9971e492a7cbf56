use ardesk_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid record {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: CoreError,
    },
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid sample data: {0}")]
    Seed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    InvalidRecord,
    DuplicateId,
    NotFound,
    Seed,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::InvalidRecord { .. } => StoreErrorKind::InvalidRecord,
            StoreError::DuplicateId(_) => StoreErrorKind::DuplicateId,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::Seed(_) => StoreErrorKind::Seed,
        }
    }
}
