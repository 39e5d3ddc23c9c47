//! Lenient shapes for generator output.
//!
//! Nothing here is trusted: every field is optional and several spellings are
//! accepted. [`crate::normalize`] turns a [`CandidateForm`] into a validated
//! store DTO.

use formgen_core::generation::GenerationError;
use serde::Deserialize;
use serde_json::Value;

/// A form as proposed by the generator.
///
/// Models often send more than one spelling of a key in the same object
/// (`name` and `title`, `text` and `label`). Each spelling is read on its own
/// and the first non-blank one wins, in the order listed on the raw structs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawForm")]
pub struct CandidateForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub questions: Option<Vec<CandidateQuestion>>,
}

#[derive(Deserialize)]
struct RawForm {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    questions: Option<Vec<CandidateQuestion>>,
    #[serde(default)]
    fields: Option<Vec<CandidateQuestion>>,
}

impl From<RawForm> for CandidateForm {
    fn from(raw: RawForm) -> Self {
        Self {
            name: first_text([raw.name, raw.title]),
            description: raw.description,
            questions: raw.questions.or(raw.fields),
        }
    }
}

/// A question as proposed by the generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct CandidateQuestion {
    pub text: Option<String>,
    pub field_type: Option<String>,
    pub options: Option<Vec<CandidateOption>>,
}

#[derive(Deserialize)]
struct RawQuestion {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    question: Option<String>,
    #[serde(default, rename = "fieldType")]
    field_type_camel: Option<String>,
    #[serde(default)]
    field_type: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default, rename = "fieldOptions")]
    field_options_camel: Option<Vec<CandidateOption>>,
    #[serde(default)]
    field_options: Option<Vec<CandidateOption>>,
    #[serde(default)]
    options: Option<Vec<CandidateOption>>,
    #[serde(default)]
    choices: Option<Vec<CandidateOption>>,
}

impl From<RawQuestion> for CandidateQuestion {
    fn from(raw: RawQuestion) -> Self {
        Self {
            text: first_text([raw.text, raw.label, raw.question]),
            field_type: first_text([raw.field_type_camel, raw.field_type, raw.kind]),
            options: raw
                .field_options_camel
                .or(raw.field_options)
                .or(raw.options)
                .or(raw.choices),
        }
    }
}

/// The first spelling that carries non-blank text.
fn first_text<const N: usize>(spellings: [Option<String>; N]) -> Option<String> {
    spellings
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// An option as proposed by the generator: a bare label, a bare number, or
/// an object with a label and an optional value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CandidateOption {
    Label(String),
    Number(serde_json::Number),
    Labelled {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        value: Option<Value>,
    },
}

impl CandidateOption {
    /// The display text and value of the option, before trimming. A missing
    /// value falls back to the text.
    pub fn text_and_value(&self) -> (String, String) {
        match self {
            CandidateOption::Label(label) => (label.clone(), label.clone()),
            CandidateOption::Number(n) => (n.to_string(), n.to_string()),
            CandidateOption::Labelled { text, label, value } => {
                let text = first_text([text.clone(), label.clone()]);
                let value = value.as_ref().and_then(scalar_to_string);
                match (text, value) {
                    (Some(text), Some(value)) => (text, value),
                    (Some(text), None) => (text.clone(), text),
                    (None, Some(value)) => (value.clone(), value),
                    (None, None) => (String::new(), String::new()),
                }
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl CandidateForm {
    /// Parse generator output.
    ///
    /// Accepts the form object itself, an object wrapping it under `form`, or
    /// a bare array of questions.
    pub fn from_value(value: Value) -> Result<Self, GenerationError> {
        let value = match value {
            Value::Object(mut map)
                if !map.contains_key("questions") && !map.contains_key("fields") =>
            {
                match map.remove("form") {
                    Some(inner @ Value::Object(_)) => inner,
                    Some(_) | None => Value::Object(map),
                }
            }
            Value::Array(questions) => {
                let mut map = serde_json::Map::new();
                map.insert("questions".into(), Value::Array(questions));
                Value::Object(map)
            }
            other => other,
        };

        if !value.is_object() {
            return Err(GenerationError::InvalidContent(
                "expected a JSON object describing the form".into(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| GenerationError::InvalidContent(format!("unexpected form shape: {e}")))
    }
}
