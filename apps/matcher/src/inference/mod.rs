//! Inference client — the single point of entry for all pretrained-model calls.
//!
//! ARCHITECTURAL RULE: extraction and scoring code never talks to the model
//! sidecar directly. It receives these capabilities as injected trait objects
//! so tests can substitute deterministic fakes.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const NER_PATH: &str = "/ner";
const EMBED_PATH: &str = "/embed";
const SIMILARITY_PATH: &str = "/similarity";
const RERANK_PATH: &str = "/rerank";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Inference service unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Entity kinds produced by the named-entity tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "PERSON")]
    Person,
    #[serde(rename = "ORG")]
    Organization,
    #[serde(rename = "LOCATION")]
    Location,
    #[serde(rename = "MISC")]
    Misc,
}

/// A tagged span of text with the tagger's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub kind: EntityKind,
    pub confidence: f64,
}

#[async_trait]
pub trait EntityTagger: Send + Sync {
    async fn tag_entities(&self, text: &str) -> Result<Vec<EntitySpan>, InferenceError>;
}

#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError>;

    /// Cosine similarity between the embeddings of two texts, in [-1, 1].
    async fn similarity(&self, text1: &str, text2: &str) -> Result<f64, InferenceError>;
}

#[async_trait]
pub trait Reranker: Send + Sync {
    /// Cross-encoder relevance of a candidate for a query, in [0, 1].
    async fn rerank(&self, query: &str, candidate: &str) -> Result<f64, InferenceError>;
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct PairRequest<'a> {
    text1: &'a str,
    text2: &'a str,
}

#[derive(Debug, Serialize)]
struct RerankRequest<'a> {
    query: &'a str,
    candidate: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    entities: Vec<EntitySpan>,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct SimilarityResponse {
    similarity: f64,
}

#[derive(Debug, Deserialize)]
struct RerankResponse {
    score: f64,
}

/// HTTP client for the inference sidecar hosting the pretrained NER,
/// sentence-embedding, and cross-encoder models.
/// Retries on 429 and 5xx with exponential backoff.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, InferenceError> {
        let url = format!("{}{path}", self.base_url);
        let mut last_error: Option<InferenceError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "inference call to {path} attempt {attempt} failed, retrying after {}ms",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.client.post(&url).json(body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(InferenceError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let message = response.text().await.unwrap_or_default();
                warn!("inference API returned {status}: {message}");
                last_error = Some(InferenceError::Api {
                    status: status.as_u16(),
                    message,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(InferenceError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: T = response.json().await?;
            debug!("inference call to {path} succeeded");
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(InferenceError::Unavailable {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl EntityTagger for InferenceClient {
    async fn tag_entities(&self, text: &str) -> Result<Vec<EntitySpan>, InferenceError> {
        let response: NerResponse = self.post_json(NER_PATH, &TextRequest { text }).await?;
        Ok(response.entities)
    }
}

#[async_trait]
impl Embedder for InferenceClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, InferenceError> {
        let response: EmbedResponse = self.post_json(EMBED_PATH, &TextRequest { text }).await?;
        Ok(response.embedding)
    }

    async fn similarity(&self, text1: &str, text2: &str) -> Result<f64, InferenceError> {
        let response: SimilarityResponse = self
            .post_json(SIMILARITY_PATH, &PairRequest { text1, text2 })
            .await?;
        Ok(response.similarity)
    }
}

#[async_trait]
impl Reranker for InferenceClient {
    async fn rerank(&self, query: &str, candidate: &str) -> Result<f64, InferenceError> {
        let response: RerankResponse = self
            .post_json(RERANK_PATH, &RerankRequest { query, candidate })
            .await?;
        Ok(response.score)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_serde_uses_wire_names() {
        let kind: EntityKind = serde_json::from_str(r#""PERSON""#).unwrap();
        assert_eq!(kind, EntityKind::Person);
        let kind: EntityKind = serde_json::from_str(r#""ORG""#).unwrap();
        assert_eq!(kind, EntityKind::Organization);
        assert_eq!(
            serde_json::to_string(&EntityKind::Location).unwrap(),
            r#""LOCATION""#
        );
        assert_eq!(
            serde_json::to_string(&EntityKind::Misc).unwrap(),
            r#""MISC""#
        );
    }

    #[test]
    fn test_entity_span_deserializes_from_sidecar_payload() {
        let json = r#"{"entities": [{"text": "Jane Doe", "kind": "PERSON", "confidence": 0.98}]}"#;
        let response: NerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.entities.len(), 1);
        assert_eq!(response.entities[0].text, "Jane Doe");
        assert_eq!(response.entities[0].kind, EntityKind::Person);
    }

    #[test]
    fn test_client_strips_trailing_slash_from_base_url() {
        let client = InferenceClient::new("http://localhost:9000/".to_string());
        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_fake_embedder_looks_up_pairs_in_either_order() {
        let embedder = fakes::FakeEmbedder::with_default(0.1).score("a", "b", 0.9);
        assert_eq!(embedder.similarity("a", "b").await.unwrap(), 0.9);
        assert_eq!(embedder.similarity("b", "a").await.unwrap(), 0.9);
        assert_eq!(embedder.similarity("a", "c").await.unwrap(), 0.1);
    }
}
