//! Minimal client for the Gemini `generateContent` endpoint.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::ProviderConfig;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::provider::ProviderError;

/// One prompt, optionally constrained to a JSON response schema.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn json(prompt: impl Into<String>, response_schema: Value) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema: Some(response_schema),
        }
    }

    fn body(&self) -> Value {
        let mut body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": self.prompt }] }],
        });
        if let Some(schema) = &self.response_schema {
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }
        body
    }
}

#[derive(Clone)]
pub struct GeminiClient {
    http_client: Arc<dyn HttpClient>,
    config: ProviderConfig,
}

impl GeminiClient {
    pub fn new(config: ProviderConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn from_config(config: ProviderConfig) -> Self {
        Self::new(config, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn has_credentials(&self) -> bool {
        self.config.has_credentials()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url,
            urlencoding::encode(&self.config.model)
        )
    }

    /// Send the prompt and return the concatenated text of the first candidate.
    ///
    /// Retryable statuses and transport errors are retried per the configured
    /// [`RetryPolicy`](crate::RetryPolicy).
    pub async fn generate(&self, request: &GenerateRequest) -> Result<String, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(ProviderError::missing_credentials)?;

        let http_request = HttpRequest::post_json(self.endpoint(), &request.body())
            .with_header("x-goog-api-key", api_key)
            .with_timeout_ms(self.config.timeout_ms);

        let retry = &self.config.retry;
        let mut attempt = 0;
        loop {
            let error = match self.http_client.execute(http_request.clone()).await {
                Ok(response) if response.is_success() => {
                    debug!(model = %self.config.model, attempt, "gemini call succeeded");
                    return extract_text(&response.body);
                }
                Ok(response) => {
                    let error = status_error(response.status);
                    if !retry.should_retry_status(response.status) {
                        return Err(error);
                    }
                    error
                }
                Err(transport) => {
                    let error = ProviderError::unavailable(format!(
                        "gemini transport error: {}",
                        transport.message()
                    ));
                    if !transport.retryable() {
                        return Err(error);
                    }
                    error
                }
            };

            if !retry.has_attempts_left(attempt) {
                return Err(error);
            }

            let delay = retry.delay_for_attempt(attempt);
            warn!(
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                error = %error,
                "gemini call failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

fn status_error(status: u16) -> ProviderError {
    match status {
        429 => ProviderError::rate_limited("gemini quota exceeded (status 429)"),
        401 | 403 => ProviderError::unavailable(format!("gemini rejected the API key (status {status})")),
        _ => ProviderError::unavailable(format!("gemini returned status {status}")),
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn extract_text(body: &str) -> Result<String, ProviderError> {
    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        ProviderError::invalid_response(format!("failed to parse gemini response: {e}"))
    })?;

    Ok(response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hola "},{"text":"mundo"}]}},{"content":{"parts":[{"text":"ignored"}]}}]}"#;
        assert_eq!(extract_text(body).expect("parse"), "Hola mundo");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(extract_text("{}").expect("parse"), "");
    }

    #[test]
    fn malformed_body_is_invalid_response() {
        let err = extract_text("not json").expect_err("must fail");
        assert_eq!(err.kind(), crate::ProviderErrorKind::InvalidResponse);
    }

    #[test]
    fn json_request_carries_schema() {
        let body = GenerateRequest::json("prompt", json!({ "type": "ARRAY" })).body();
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt");

        let body = GenerateRequest::text("prompt").body();
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(
            ProviderConfig::default(),
            Arc::new(crate::http_client::NoopHttpClient),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
