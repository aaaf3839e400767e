mod config;
mod product;
mod vector;

pub use config::{
    Config, DATABASE_NAME, DEFAULT_INDEX_NAME, EMBEDDING_API_URL, EMBEDDING_DIMENSION,
    EMBEDDING_MODEL, INDEX_CLOUD, INDEX_METRIC, INDEX_REGION, INDEX_SETTLE_SECS,
    PRODUCTS_COLLECTION, UPSERT_BATCH_SIZE,
};
pub use product::Product;
pub use vector::{VectorMetadata, VectorRecord};
