//! Async LLM client for narration
//!
//! This is a model-agnostic HTTP client for calling LLM APIs.
//! Supports Anthropic, OpenAI-compatible (DeepSeek, etc) and Gemini APIs.
//! Key principle: the LLM only narrates. It never decides puzzle state.

use crate::core::config::NarratorConfig;
use crate::core::error::{BargainError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// API format type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFormat {
    Anthropic,
    OpenAI,
    Gemini,
}

/// Async LLM client for making API calls
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    api_format: ApiFormat,
}

impl LlmClient {
    /// Create a new LLM client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let api_format = Self::detect_api_format(&api_url);
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
            max_tokens: 512,
            api_format,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Detect API format from URL
    fn detect_api_format(url: &str) -> ApiFormat {
        if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else if url.contains("generativelanguage.googleapis.com") {
            ApiFormat::Gemini
        } else {
            // DeepSeek, OpenAI, and other compatible APIs use OpenAI format
            ApiFormat::OpenAI
        }
    }

    /// Create a client from narrator config plus environment variables
    ///
    /// Required: the variable named by `api_key_env` (LLM_API_KEY by default)
    /// Optional: LLM_API_URL and LLM_MODEL override the config values
    pub fn from_config(config: &NarratorConfig) -> Result<Self> {
        if !config.enabled {
            return Err(BargainError::NarratorDisabled);
        }

        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| BargainError::LlmError(format!("{} not set", config.api_key_env)))?;
        let api_url = std::env::var("LLM_API_URL").unwrap_or_else(|_| config.api_url.clone());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| config.model.clone());

        Ok(Self::new(api_key, api_url, model).with_max_tokens(config.max_tokens))
    }

    /// Send a completion request to the LLM
    ///
    /// # Arguments
    /// * `system` - System prompt providing context and instructions
    /// * `user` - User message/query to process
    ///
    /// # Returns
    /// The LLM's text response
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        tracing::debug!("LLM request to {} ({:?})", self.model, self.api_format);
        match self.api_format {
            ApiFormat::Anthropic => self.complete_anthropic(system, user).await,
            ApiFormat::OpenAI => self.complete_openai(system, user).await,
            ApiFormat::Gemini => self.complete_gemini(system, user).await,
        }
    }

    async fn complete_anthropic(&self, system: &str, user: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: system.into(),
            messages: vec![Message {
                role: "user".into(),
                content: user.into(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BargainError::LlmError(format!("API error: {}", error_text)));
        }

        let completion: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        completion
            .content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| BargainError::LlmError("Empty response".into()))
    }

    async fn complete_openai(&self, system: &str, user: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BargainError::LlmError(format!("API error: {}", error_text)));
        }

        let completion: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| BargainError::LlmError("Empty response".into()))
    }

    async fn complete_gemini(&self, system: &str, user: &str) -> Result<String> {
        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: system.into() }],
            },
            contents: vec![GeminiContent {
                role: Some("user".into()),
                parts: vec![GeminiPart { text: user.into() }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: self.max_tokens,
            },
        };

        let url = format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BargainError::LlmError(format!("API error: {}", error_text)));
        }

        let completion: GeminiResponse = response
            .json()
            .await
            .map_err(|e| BargainError::LlmError(e.to_string()))?;

        completion
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| BargainError::LlmError("Empty response".into()))
    }
}

// Anthropic API format
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

// OpenAI-compatible API format (DeepSeek, OpenAI, etc.)
#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// Gemini generateContent format
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

// Shared
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LlmClient::new(
            "test-key".into(),
            "https://api.example.com".into(),
            "test-model".into(),
        );
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.api_url, "https://api.example.com");
        assert_eq!(client.model, "test-model");
        assert_eq!(client.api_format, ApiFormat::OpenAI);
    }

    #[test]
    fn test_detect_api_format() {
        assert_eq!(
            LlmClient::detect_api_format("https://api.anthropic.com/v1/messages"),
            ApiFormat::Anthropic
        );
        assert_eq!(
            LlmClient::detect_api_format(
                "https://generativelanguage.googleapis.com/v1beta/models"
            ),
            ApiFormat::Gemini
        );
        assert_eq!(
            LlmClient::detect_api_format("https://api.deepseek.com/chat/completions"),
            ApiFormat::OpenAI
        );
    }

    #[test]
    fn test_disabled_config_refuses_client() {
        let config = NarratorConfig {
            enabled: false,
            ..NarratorConfig::default()
        };
        assert!(matches!(
            LlmClient::from_config(&config),
            Err(BargainError::NarratorDisabled)
        ));
    }

    #[test]
    fn test_from_config_missing_key() {
        let config = NarratorConfig {
            api_key_env: "BLACKOUT_TEST_KEY_THAT_IS_NEVER_SET".into(),
            ..NarratorConfig::default()
        };
        assert!(matches!(
            LlmClient::from_config(&config),
            Err(BargainError::LlmError(_))
        ));
    }

    #[test]
    fn test_gemini_request_shape() {
        let request = GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: "sys".into() }],
            },
            contents: vec![GeminiContent {
                role: Some("user".into()),
                parts: vec![GeminiPart { text: "hi".into() }],
            }],
            generation_config: GeminiGenerationConfig {
                max_output_tokens: 64,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "sys");
        assert!(json["systemInstruction"].get("role").is_none());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 64);
    }

    #[test]
    fn test_gemini_response_parse() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"The lights flicker."}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.candidates[0].content.parts[0].text, "The lights flicker.");
    }
}
