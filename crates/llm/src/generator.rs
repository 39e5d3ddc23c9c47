//! [`FormGenerator`] backed by a chat-completions endpoint.

use async_trait::async_trait;
use formgen_core::generation::{FormGenerator, GenerationError};

use crate::api::{ChatMessage, ChatRequest, LlmApi, LlmApiError, ResponseFormat};
use crate::config::LlmConfig;
use crate::prompt::{build_user_message, FORM_GENERATION_PROMPT};

/// Low temperature keeps the JSON shape stable across calls.
const TEMPERATURE: f32 = 0.2;

pub struct LlmFormGenerator {
    api: LlmApi,
    model: String,
}

impl LlmFormGenerator {
    pub fn new(config: &LlmConfig) -> Result<Self, LlmApiError> {
        Ok(Self {
            api: LlmApi::new(config)?,
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl FormGenerator for LlmFormGenerator {
    async fn generate(&self, description: &str) -> Result<serde_json::Value, GenerationError> {
        let messages = [
            ChatMessage::system(FORM_GENERATION_PROMPT),
            ChatMessage::user(build_user_message(description)),
        ];
        let request = ChatRequest {
            model: &self.model,
            messages: &messages,
            response_format: ResponseFormat::json_object(),
            temperature: TEMPERATURE,
        };

        let response = self.api.chat(&request).await.map_err(|e| {
            tracing::warn!(error = %e, model = %self.model, "Form generation request failed");
            GenerationError::Unavailable(e.to_string())
        })?;

        let content = response.first_content().ok_or_else(|| {
            GenerationError::InvalidContent("response has no message content".into())
        })?;

        parse_json_content(content)
    }
}

/// Parse model output into JSON, tolerating a surrounding markdown code fence
/// or prose around the object.
pub fn parse_json_content(content: &str) -> Result<serde_json::Value, GenerationError> {
    let trimmed = strip_code_fence(content.trim());
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    // Fall back to the outermost braces.
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => serde_json::from_str(&trimmed[start..=end])
            .map_err(|e| GenerationError::InvalidContent(format!("invalid JSON: {e}"))),
        _ => Err(GenerationError::InvalidContent(
            "response does not contain a JSON object".into(),
        )),
    }
}

fn strip_code_fence(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop the info string (e.g. `json`) on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
