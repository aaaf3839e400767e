//! Error types for the catalog indexer.

use thiserror::Error;

/// Errors related to the product document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to MongoDB: {0}")]
    ConnectionError(String),

    #[error("MongoDB query error: {0}")]
    QueryError(#[from] mongodb::error::Error),
}

/// Errors related to embedding operations.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("embedding server error: {0}")]
    ServerError(String),

    #[error("invalid embedding response: {0}")]
    InvalidResponse(String),
}

/// Errors related to the vector index.
#[derive(Debug, Error)]
pub enum VectorIndexError {
    #[error("vector index request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("list indexes error: {0}")]
    ListError(String),

    #[error("create index error: {0}")]
    CreateError(String),

    #[error("describe index error: {0}")]
    DescribeError(String),

    #[error("upsert error: {0}")]
    UpsertError(String),

    #[error("invalid vector index response: {0}")]
    InvalidResponse(String),
}
