use std::env;

use async_trait::async_trait;
use learner_core::model::ExecutionResult;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::prompt::{interpreter_prompt, tutor_prompt};
use super::{
    EXPLAIN_EMPTY, EXPLAIN_FAILED, EXPLAIN_UNAVAILABLE, ExecutionGateway, NOT_CONFIGURED_OUTPUT,
    RUNTIME_UNREACHABLE_OUTPUT,
};
use crate::error::GatewayError;

pub const API_KEY_VAR: &str = "LEARNER_AI_API_KEY";
pub const BASE_URL_VAR: &str = "LEARNER_AI_BASE_URL";
pub const MODEL_VAR: &str = "LEARNER_AI_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Connection settings for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LlmConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl LlmConfig {
    /// Reads `LEARNER_AI_*` from the process environment.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. `None` when no usable API key
    /// is present.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(API_KEY_VAR)?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let model = lookup(MODEL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key: api_key.trim().to_string(),
            model,
        })
    }

    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Thin chat-completions client. Disabled when constructed without a config.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    config: Option<LlmConfig>,
}

impl LlmClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LlmConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<LlmConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    #[must_use]
    pub fn model(&self) -> Option<&str> {
        self.config.as_ref().map(|config| config.model.as_str())
    }

    /// Send a single-turn prompt and return the trimmed completion text.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` when the client is disabled, the request fails,
    /// or the completion is empty.
    pub async fn complete(&self, prompt: &str) -> Result<String, GatewayError> {
        let config = self.config.as_ref().ok_or(GatewayError::Disabled)?;

        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(config.completions_url())
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(GatewayError::EmptyResponse)?;

        Ok(content)
    }
}

/// `ExecutionGateway` backed by a language model.
#[derive(Clone)]
pub struct LlmGateway {
    client: LlmClient,
}

impl LlmGateway {
    #[must_use]
    pub fn new(client: LlmClient) -> Self {
        if !client.enabled() {
            tracing::warn!(
                "{API_KEY_VAR} is not set; code execution and explanations are disabled"
            );
        }
        Self { client }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(LlmClient::from_env())
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.client.enabled()
    }
}

#[async_trait]
impl ExecutionGateway for LlmGateway {
    async fn execute(&self, source: &str) -> ExecutionResult {
        match self.client.complete(&interpreter_prompt(source)).await {
            Ok(output) => ExecutionResult::success(output),
            Err(GatewayError::EmptyResponse) => ExecutionResult::success(""),
            Err(GatewayError::Disabled) => ExecutionResult::failure(NOT_CONFIGURED_OUTPUT),
            Err(err) => {
                tracing::error!(error = %err, "execution request failed");
                ExecutionResult::failure(RUNTIME_UNREACHABLE_OUTPUT)
            }
        }
    }

    async fn explain(&self, topic: &str, source: &str) -> String {
        match self.client.complete(&tutor_prompt(topic, source)).await {
            Ok(text) => text,
            Err(GatewayError::EmptyResponse) => EXPLAIN_EMPTY.to_string(),
            Err(GatewayError::Disabled) => EXPLAIN_UNAVAILABLE.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "explanation request failed");
                EXPLAIN_FAILED.to_string()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_requires_a_non_blank_key() {
        assert_eq!(LlmConfig::from_lookup(lookup(&[])), None);
        assert_eq!(LlmConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])), None);
    }

    #[test]
    fn config_applies_defaults() {
        let config = LlmConfig::from_lookup(lookup(&[(API_KEY_VAR, "sk-test")])).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn config_overrides_trim_trailing_slash() {
        let config = LlmConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "k"),
            (BASE_URL_VAR, "http://localhost:11434/v1/"),
            (MODEL_VAR, "llama3"),
        ]))
        .unwrap();

        assert_eq!(config.model, "llama3");
        assert_eq!(
            config.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
    }

    #[test]
    fn chat_request_shape() {
        let request = ChatRequest {
            model: "m".into(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hi".into(),
            }],
            temperature: 0.2,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hi");
    }

    #[test]
    fn chat_response_tolerates_missing_content() {
        let body: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(body.choices[0].message.content.is_none());
    }

    #[tokio::test]
    async fn unconfigured_gateway_degrades_to_fixed_messages() {
        let gateway = LlmGateway::new(LlmClient::new(None));

        let result = gateway.execute("print(1)").await;
        assert_eq!(result, ExecutionResult::failure(NOT_CONFIGURED_OUTPUT));

        let explanation = gateway.explain("loops", "for i in range(3): pass").await;
        assert_eq!(explanation, EXPLAIN_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unreachable_backend_is_an_error_flagged_result() {
        let config = LlmConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: "k".into(),
            model: "m".into(),
        };
        let gateway = LlmGateway::new(LlmClient::new(Some(config)));

        let result = gateway.execute("print(1)").await;
        assert_eq!(result, ExecutionResult::failure(RUNTIME_UNREACHABLE_OUTPUT));

        let explanation = gateway.explain("print", "print(1)").await;
        assert_eq!(explanation, EXPLAIN_FAILED);
    }
}
