//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API, the provider the
//! permit office uses for form-data extraction.
//!
//! # Features
//!
//! - Async HTTP communication via `generateContent`
//! - JSON response mode, optionally constrained by a response schema
//! - Configurable endpoint, model, and timeout
//!
//! Exactly one request is made per invocation. Retry policy belongs to the
//! caller, not this layer.
//!
//! # Examples
//!
//! ```no_run
//! use permitdesk_llm::GeminiProvider;
//!
//! let provider = GeminiProvider::new(
//!     "https://generativelanguage.googleapis.com",
//!     "gemini-2.0-flash",
//!     "api-key",
//! );
//! ```

use crate::ProviderError;
use permitdesk_domain::traits::TextProvider;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default timeout for provider requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Google Generative Language API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<Value>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL
    /// - `model`: model name (e.g. "gemini-2.0-flash")
    /// - `api_key`: API key sent via the `x-goog-api-key` header
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::with_timeout(
            endpoint,
            model,
            api_key,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a provider with an explicit request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder().timeout(timeout).build().unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Create a provider against the public endpoint and default model
    pub fn default_endpoint(api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL, api_key)
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text, optionally constrained to a JSON schema
    ///
    /// A well-formed response that carries no candidates yields an empty
    /// string; deciding what an empty result means is the caller's concern.
    ///
    /// # Errors
    ///
    /// - `Transport` on connection failure, timeout, or a non-success status
    /// - `ModelNotAvailable` on HTTP 404
    /// - `RateLimited` on HTTP 429
    /// - `InvalidResponse` if the body is not the expected shape
    pub async fn generate_content(
        &self,
        prompt: &str,
        schema: Option<Value>,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        );

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Transport(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        let text = body
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

impl TextProvider for GeminiProvider {
    type Error = ProviderError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate_content(prompt, None).await })
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        let schema: Value = serde_json::from_str(schema)
            .map_err(|e| ProviderError::Other(format!("invalid schema JSON: {}", e)))?;

        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(async { self.generate_content(prompt, Some(schema)).await })
    }
}
