//! Stub generators shared by the pipeline integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use formgen_core::generation::{FormGenerator, GenerationError};

/// Returns a fixed payload and counts how often it was asked.
pub struct StaticGenerator {
    payload: serde_json::Value,
    calls: AtomicUsize,
}

impl StaticGenerator {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            payload,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FormGenerator for StaticGenerator {
    async fn generate(&self, _description: &str) -> Result<serde_json::Value, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.payload.clone())
    }
}

/// Always fails as if the endpoint were unreachable.
pub struct UnreachableGenerator;

#[async_trait]
impl FormGenerator for UnreachableGenerator {
    async fn generate(&self, _description: &str) -> Result<serde_json::Value, GenerationError> {
        Err(GenerationError::Unavailable("connection refused".into()))
    }
}

/// What a model typically answers for
/// "a feedback survey with a 1-5 rating and a comments box".
pub fn feedback_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "Feedback Survey",
        "description": "Tell us about your experience.",
        "questions": [
            {
                "text": "How would you rate your experience?",
                "fieldType": "RadioGroup",
                "fieldOptions": [
                    { "text": "1", "value": "1" },
                    { "text": "2", "value": "2" },
                    { "text": "3", "value": "3" },
                    { "text": "4", "value": "4" },
                    { "text": "5", "value": "5" }
                ]
            },
            {
                "text": "Any other comments?",
                "fieldType": "Textarea",
                "fieldOptions": [{ "text": "stray", "value": "stray" }]
            }
        ]
    })
}
