//! Runtime configuration and fixed pipeline constants.

pub const DATABASE_NAME: &str = "ai-shopping-agent";
pub const PRODUCTS_COLLECTION: &str = "products";

pub const EMBEDDING_API_URL: &str = "https://integrate.api.nvidia.com/v1/embeddings";
pub const EMBEDDING_MODEL: &str = "nvidia/nv-embedqa-e5-v5";
pub const EMBEDDING_DIMENSION: usize = 1024;

pub const DEFAULT_INDEX_NAME: &str = "luxe-products";
pub const INDEX_METRIC: &str = "cosine";
pub const INDEX_CLOUD: &str = "aws";
pub const INDEX_REGION: &str = "us-east-1";

/// Upper bound on vectors per upsert request, sized for the index's
/// per-request payload limit.
pub const UPSERT_BATCH_SIZE: usize = 50;

/// Seconds to wait after creating the index before writing to it.
/// A freshly created serverless index is not immediately writable.
pub const INDEX_SETTLE_SECS: u64 = 10;

/// Process-wide configuration, read once at startup and passed explicitly
/// into each component constructor.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub nvidia_api_key: String,
    pub pinecone_api_key: String,
    pub index_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_dimension() {
        assert_eq!(EMBEDDING_DIMENSION, 1024);
    }

    #[test]
    fn test_batch_size_fits_payload_limit() {
        assert!(UPSERT_BATCH_SIZE > 0);
        assert!(UPSERT_BATCH_SIZE <= 100);
    }
}
