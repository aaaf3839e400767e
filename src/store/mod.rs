//! Product document store access.

mod mongo;

pub use mongo::MongoProductStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::Product;

/// Read-only capability interface over the catalog store.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch every product document, unfiltered, in store order.
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError>;
}
