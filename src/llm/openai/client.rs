//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResponse},
};

use super::mapper::{from_openai_response, to_openai_request};
use super::types::{ApiErrorEnvelope, ResponseObject};

/// Public OpenAI API root
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI model identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenAiModel {
    /// GPT-4o mini
    Gpt4oMini,
    /// GPT-4o
    Gpt4o,
    /// GPT-4.1 mini
    Gpt41Mini,
    /// Any other model name, passed through unchanged
    Other(String),
}

impl OpenAiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &str {
        match self {
            OpenAiModel::Gpt4oMini => "gpt-4o-mini",
            OpenAiModel::Gpt4o => "gpt-4o",
            OpenAiModel::Gpt41Mini => "gpt-4.1-mini",
            OpenAiModel::Other(name) => name,
        }
    }

    /// Resolve a model from its identifier
    pub fn from_name(name: &str) -> Self {
        match name {
            "gpt-4o-mini" => OpenAiModel::Gpt4oMini,
            "gpt-4o" => OpenAiModel::Gpt4o,
            "gpt-4.1-mini" => OpenAiModel::Gpt41Mini,
            other => OpenAiModel::Other(other.to_string()),
        }
    }
}

impl Default for OpenAiModel {
    fn default() -> Self {
        OpenAiModel::Gpt4oMini
    }
}

/// Client for the OpenAI Responses API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Bearer API key
    api_key: SecretString,
    /// API root, without trailing slash
    base_url: String,
    /// Model to use
    model: OpenAiModel,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be built.
    pub fn new(
        api_key: SecretString,
        base_url: impl Into<String>,
        model: OpenAiModel,
    ) -> Result<Self, LlmError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(LlmError::AuthenticationError(
                "OpenAI API key is empty".to_string(),
            ));
        }

        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::HttpError {
                status: 0,
                body: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model,
        })
    }

    /// Build the endpoint URL for response creation
    fn build_endpoint_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    async fn create_response(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        let body = to_openai_request(self.model.as_str(), request);

        let url = self.build_endpoint_url();
        tracing::debug!(url = %url, model = %body.model, input_len = body.input.len(), "calling responses API");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            return Err(map_error_status(status, retry_after, body));
        }

        let parsed: ResponseObject = response.json().await?;
        if parsed.status.as_deref() == Some("failed") {
            if let Some(error) = parsed.error {
                return Err(LlmError::ProviderError {
                    code: error.code.unwrap_or_else(|| "response_failed".to_string()),
                    message: error.message,
                });
            }
        }

        let converted = from_openai_response(parsed);
        if let Some(usage) = &converted.usage {
            tracing::debug!(
                response_id = %converted.id,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "responses API call completed"
            );
        }
        Ok(converted)
    }
}

/// Translate a non-success HTTP status into an `LlmError`
fn map_error_status(status: StatusCode, retry_after: Option<Duration>, body: String) -> LlmError {
    let api_error = serde_json::from_str::<ApiErrorEnvelope>(&body)
        .ok()
        .map(|envelope| envelope.error);

    match status {
        StatusCode::UNAUTHORIZED => LlmError::AuthenticationError(
            api_error.map(|e| e.message).unwrap_or(body),
        ),
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded { retry_after },
        _ => match api_error {
            Some(error) => LlmError::ProviderError {
                code: error
                    .code
                    .or(error.error_type)
                    .unwrap_or_else(|| status.as_u16().to_string()),
                message: error.message,
            },
            None => LlmError::HttpError {
                status: status.as_u16(),
                body,
            },
        },
    }
}

#[async_trait]
impl LlmProvider for OpenAiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, LlmError> {
        self.create_response(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn test_model_as_str() {
        assert_eq!(OpenAiModel::Gpt4oMini.as_str(), "gpt-4o-mini");
        assert_eq!(OpenAiModel::Gpt4o.as_str(), "gpt-4o");
        assert_eq!(OpenAiModel::Gpt41Mini.as_str(), "gpt-4.1-mini");
        assert_eq!(OpenAiModel::Other("o4-mini".to_string()).as_str(), "o4-mini");
        assert_eq!(OpenAiModel::default(), OpenAiModel::Gpt4oMini);
    }

    #[test]
    fn test_model_from_name() {
        assert_eq!(OpenAiModel::from_name("gpt-4o-mini"), OpenAiModel::Gpt4oMini);
        assert_eq!(
            OpenAiModel::from_name("gpt-5"),
            OpenAiModel::Other("gpt-5".to_string())
        );
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let client =
            OpenAiClient::new(secret("sk-test"), "http://localhost:8080/v1/", OpenAiModel::Gpt4oMini)
                .unwrap();
        assert_eq!(client.build_endpoint_url(), "http://localhost:8080/v1/responses");
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = OpenAiClient::new(secret("  "), DEFAULT_BASE_URL, OpenAiModel::Gpt4oMini);
        assert!(matches!(result, Err(LlmError::AuthenticationError(_))));
    }

    #[test]
    fn test_map_error_status_unauthorized() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = map_error_status(StatusCode::UNAUTHORIZED, None, body.to_string());
        match err {
            LlmError::AuthenticationError(message) => {
                assert_eq!(message, "Incorrect API key provided")
            }
            other => panic!("Expected authentication error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_error_status_rate_limited() {
        let err = map_error_status(
            StatusCode::TOO_MANY_REQUESTS,
            Some(Duration::from_secs(7)),
            String::new(),
        );
        assert!(matches!(
            err,
            LlmError::RateLimitExceeded { retry_after: Some(d) } if d == Duration::from_secs(7)
        ));
    }

    #[test]
    fn test_map_error_status_provider_error() {
        let body = r#"{"error":{"message":"Invalid value: 'toolz'","type":"invalid_request_error","code":null}}"#;
        let err = map_error_status(StatusCode::BAD_REQUEST, None, body.to_string());
        match err {
            LlmError::ProviderError { code, message } => {
                assert_eq!(code, "invalid_request_error");
                assert!(message.contains("toolz"));
            }
            other => panic!("Expected provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_error_status_unstructured_body() {
        let err = map_error_status(
            StatusCode::BAD_GATEWAY,
            None,
            "<html>upstream down</html>".to_string(),
        );
        assert!(matches!(err, LlmError::HttpError { status: 502, .. }));
    }
}
