//! Embedding client for the NVIDIA retrieval embedding API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::EmbeddingError;
use crate::models::{Config, EMBEDDING_API_URL, EMBEDDING_MODEL};

/// Input type flag for embedding generation. Passages are indexed documents;
/// queries get encoded for search-side lookups.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Passage,
    Query,
}

/// Request body for the embeddings endpoint.
#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    input: [&'a str; 1],
    model: &'a str,
    input_type: InputType,
    encoding_format: &'a str,
    truncate: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// Anything that can turn one text into one embedding vector.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a text with the given input type. One network call per
    /// invocation; no caching, no retry.
    async fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, EmbeddingError>;

    /// Embed a text for indexing.
    async fn embed_passage(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed(text, InputType::Passage).await
    }
}

/// Client for the remote embedding API.
#[derive(Debug, Clone)]
pub struct EmbeddingClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl EmbeddingClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_url: EMBEDDING_API_URL.to_string(),
            api_key: config.nvidia_api_key.clone(),
        }
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    async fn embed(&self, text: &str, input_type: InputType) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbedRequest {
            input: [text],
            model: EMBEDDING_MODEL,
            input_type,
            encoding_format: "float",
            // Overlong input is cut from the end rather than rejected.
            truncate: "END",
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::ServerError(format!(
                "status {}: {}",
                status, body
            )));
        }

        let embed_response: EmbedResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::InvalidResponse(e.to_string()))?;

        let embedding = embed_response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| {
                EmbeddingError::InvalidResponse("empty embedding result list".to_string())
            })?;

        if embedding.is_empty() {
            return Err(EmbeddingError::InvalidResponse(
                "empty embedding vector".to_string(),
            ));
        }

        Ok(embedding)
    }
}
