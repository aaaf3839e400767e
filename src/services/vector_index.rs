//! Vector index access and provisioning over the Pinecone REST API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::error::VectorIndexError;
use crate::models::{
    Config, EMBEDDING_DIMENSION, INDEX_CLOUD, INDEX_METRIC, INDEX_REGION, VectorRecord,
};

const CONTROL_PLANE_URL: &str = "https://api.pinecone.io";
const API_VERSION: &str = "2025-01";

/// Narrow capability interface over the vector index: list, create, upsert.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Names of all existing indexes.
    async fn list_indexes(&self) -> Result<Vec<String>, VectorIndexError>;

    /// Create a serverless index with the fixed metric and cloud spec.
    async fn create_index(&self, name: &str, dimension: usize) -> Result<(), VectorIndexError>;

    /// Insert-or-replace the records by id. Returns the upserted count.
    async fn upsert(
        &self,
        name: &str,
        records: &[VectorRecord],
    ) -> Result<usize, VectorIndexError>;
}

#[derive(Debug, Serialize)]
struct CreateIndexRequest<'a> {
    name: &'a str,
    dimension: usize,
    metric: &'a str,
    spec: IndexSpec<'a>,
}

#[derive(Debug, Serialize)]
struct IndexSpec<'a> {
    serverless: ServerlessSpec<'a>,
}

#[derive(Debug, Serialize)]
struct ServerlessSpec<'a> {
    cloud: &'a str,
    region: &'a str,
}

#[derive(Debug, Deserialize)]
struct IndexList {
    #[serde(default)]
    indexes: Vec<IndexDescription>,
}

#[derive(Debug, Deserialize)]
struct IndexDescription {
    name: String,
    #[serde(default)]
    host: String,
}

#[derive(Debug, Serialize)]
struct UpsertRequest<'a> {
    vectors: &'a [VectorRecord],
}

#[derive(Debug, Deserialize)]
struct UpsertResponse {
    #[serde(rename = "upsertedCount", default)]
    upserted_count: usize,
}

/// Pinecone-backed implementation. Control-plane calls (list, create,
/// describe) go to the global API host; upserts go to the index's own data
/// plane host, resolved once via describe and cached for the run.
pub struct PineconeClient {
    client: Client,
    control_plane: String,
    api_key: String,
    host: OnceCell<String>,
}

impl PineconeClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            control_plane: CONTROL_PLANE_URL.to_string(),
            api_key: config.pinecone_api_key.clone(),
            host: OnceCell::new(),
        }
    }

    async fn describe_index(&self, name: &str) -> Result<String, VectorIndexError> {
        let url = format!("{}/indexes/{}", self.control_plane, name);
        let response = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::DescribeError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let description: IndexDescription = response
            .json()
            .await
            .map_err(|e| VectorIndexError::InvalidResponse(e.to_string()))?;

        if description.host.is_empty() {
            return Err(VectorIndexError::InvalidResponse(format!(
                "index '{}' has no data plane host",
                name
            )));
        }

        Ok(description.host)
    }

    async fn index_host(&self, name: &str) -> Result<&str, VectorIndexError> {
        self.host
            .get_or_try_init(|| self.describe_index(name))
            .await
            .map(String::as_str)
    }
}

#[async_trait]
impl VectorIndex for PineconeClient {
    async fn list_indexes(&self) -> Result<Vec<String>, VectorIndexError> {
        let url = format!("{}/indexes", self.control_plane);
        let response = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::ListError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let list: IndexList = response
            .json()
            .await
            .map_err(|e| VectorIndexError::InvalidResponse(e.to_string()))?;

        Ok(list.indexes.into_iter().map(|idx| idx.name).collect())
    }

    async fn create_index(&self, name: &str, dimension: usize) -> Result<(), VectorIndexError> {
        let url = format!("{}/indexes", self.control_plane);
        let request = CreateIndexRequest {
            name,
            dimension,
            metric: INDEX_METRIC,
            spec: IndexSpec {
                serverless: ServerlessSpec {
                    cloud: INDEX_CLOUD,
                    region: INDEX_REGION,
                },
            },
        };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::CreateError(format!(
                "status {}: {}",
                status, body
            )));
        }

        Ok(())
    }

    async fn upsert(
        &self,
        name: &str,
        records: &[VectorRecord],
    ) -> Result<usize, VectorIndexError> {
        if records.is_empty() {
            return Ok(0);
        }

        let host = self.index_host(name).await?;
        let url = format!("https://{}/vectors/upsert", host);
        let request = UpsertRequest { vectors: records };

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.api_key)
            .header("X-Pinecone-API-Version", API_VERSION)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(VectorIndexError::UpsertError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let upsert_response: UpsertResponse = response
            .json()
            .await
            .map_err(|e| VectorIndexError::InvalidResponse(e.to_string()))?;

        Ok(upsert_response.upserted_count)
    }
}

/// Ensure the target index exists before any upsert. Returns true when the
/// index was created on this call.
///
/// A freshly created serverless index takes a moment to become writable, so
/// creation is followed by a fixed settle sleep rather than a readiness
/// poll. Creation errors propagate; they are fatal to the run.
pub async fn ensure_index(
    index: &dyn VectorIndex,
    name: &str,
    settle: Duration,
) -> Result<bool, VectorIndexError> {
    let existing = index.list_indexes().await?;
    if existing.iter().any(|n| n == name) {
        return Ok(false);
    }

    index.create_index(name, EMBEDDING_DIMENSION).await?;
    tokio::time::sleep(settle).await;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct FakeIndex {
        existing: Vec<String>,
        created: Mutex<Vec<(String, usize)>>,
    }

    impl FakeIndex {
        fn with_existing(names: &[&str]) -> Self {
            Self {
                existing: names.iter().map(|n| n.to_string()).collect(),
                created: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VectorIndex for FakeIndex {
        async fn list_indexes(&self) -> Result<Vec<String>, VectorIndexError> {
            Ok(self.existing.clone())
        }

        async fn create_index(
            &self,
            name: &str,
            dimension: usize,
        ) -> Result<(), VectorIndexError> {
            self.created
                .lock()
                .unwrap()
                .push((name.to_string(), dimension));
            Ok(())
        }

        async fn upsert(
            &self,
            _name: &str,
            records: &[VectorRecord],
        ) -> Result<usize, VectorIndexError> {
            Ok(records.len())
        }
    }

    #[tokio::test]
    async fn test_ensure_index_noop_when_present() {
        let fake = FakeIndex::with_existing(&["luxe-products", "other"]);
        let created = ensure_index(&fake, "luxe-products", Duration::ZERO)
            .await
            .unwrap();
        assert!(!created);
        assert!(fake.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ensure_index_creates_when_absent() {
        let fake = FakeIndex::with_existing(&["other"]);
        let created = ensure_index(&fake, "luxe-products", Duration::ZERO)
            .await
            .unwrap();
        assert!(created);
        let calls = fake.created.lock().unwrap();
        assert_eq!(
            calls.as_slice(),
            &[("luxe-products".to_string(), EMBEDDING_DIMENSION)]
        );
    }

    #[test]
    fn test_create_request_body() {
        let request = CreateIndexRequest {
            name: "luxe-products",
            dimension: EMBEDDING_DIMENSION,
            metric: INDEX_METRIC,
            spec: IndexSpec {
                serverless: ServerlessSpec {
                    cloud: INDEX_CLOUD,
                    region: INDEX_REGION,
                },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["dimension"], 1024);
        assert_eq!(json["metric"], "cosine");
        assert_eq!(json["spec"]["serverless"]["cloud"], "aws");
        assert_eq!(json["spec"]["serverless"]["region"], "us-east-1");
    }

    #[test]
    fn test_index_list_parsing() {
        let payload = r#"{"indexes":[{"name":"a","host":"a.svc.pinecone.io"},{"name":"b"}]}"#;
        let list: IndexList = serde_json::from_str(payload).unwrap();
        let names: Vec<String> = list.indexes.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
