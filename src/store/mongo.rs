use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use super::ProductStore;
use crate::error::StoreError;
use crate::models::{Config, DATABASE_NAME, PRODUCTS_COLLECTION, Product};

/// MongoDB-backed product store, fixed to the catalog database and
/// products collection.
pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    /// Connect and verify the server is reachable. The driver connects
    /// lazily, so a ping is issued here to fail fast on a bad URI.
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let database = client.database(DATABASE_NAME);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        Ok(Self {
            collection: database.collection(PRODUCTS_COLLECTION),
        })
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let products = cursor.try_collect().await?;
        Ok(products)
    }
}
