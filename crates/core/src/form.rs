//! Form content rules: the closed field-type enumeration and the validation
//! helpers used by the store and the generation pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a form name, in characters.
pub const MAX_NAME_LEN: usize = 255;
/// Maximum length of a natural-language form description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 4000;
/// Maximum number of questions in a single form tree.
pub const MAX_QUESTIONS: usize = 50;
/// Maximum number of options on a single choice question.
pub const MAX_OPTIONS_PER_QUESTION: usize = 50;

// ---------------------------------------------------------------------------
// Field type
// ---------------------------------------------------------------------------

/// The kind of input a question renders as.
///
/// Serialized with the storage labels of the `field_type` Postgres enum
/// (`RadioGroup`, `CheckboxGroup`, ...) so the frontend can map them straight
/// onto its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FieldType {
    /// Pick exactly one of several options.
    #[serde(rename = "RadioGroup")]
    SingleChoiceGroup,
    /// Pick any number of several options.
    #[serde(rename = "CheckboxGroup")]
    MultiChoiceGroup,
    /// Pick one option from a dropdown.
    #[serde(rename = "Select")]
    SingleSelect,
    /// Single line of free text.
    #[serde(rename = "Input")]
    TextLine,
    /// Multi-line free text.
    #[serde(rename = "Textarea")]
    TextBlock,
    /// On/off toggle.
    #[serde(rename = "Switch")]
    Toggle,
}

impl FieldType {
    /// Every field type, in storage-enum order.
    pub const ALL: [FieldType; 6] = [
        FieldType::SingleChoiceGroup,
        FieldType::MultiChoiceGroup,
        FieldType::SingleSelect,
        FieldType::TextLine,
        FieldType::TextBlock,
        FieldType::Toggle,
    ];

    /// Fallback for labels that cannot be mapped onto the enumeration.
    pub const DEFAULT: FieldType = FieldType::TextLine;

    /// The label stored in the `field_type` Postgres enum.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::SingleChoiceGroup => "RadioGroup",
            FieldType::MultiChoiceGroup => "CheckboxGroup",
            FieldType::SingleSelect => "Select",
            FieldType::TextLine => "Input",
            FieldType::TextBlock => "Textarea",
            FieldType::Toggle => "Switch",
        }
    }

    /// Whether questions of this type carry selectable options.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldType::SingleChoiceGroup | FieldType::MultiChoiceGroup | FieldType::SingleSelect
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    /// Strict parse of a storage label. Use the pipeline's normalizer for
    /// free-form labels coming from the generator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid field type '{s}'. Must be one of: {}",
                    FieldType::ALL.map(FieldType::as_str).join(", ")
                ))
            })
    }
}

impl TryFrom<String> for FieldType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Validation helpers
// ---------------------------------------------------------------------------

/// Validate that an owner reference is present.
pub fn validate_owner_id(owner_id: &str) -> Result<(), CoreError> {
    if owner_id.trim().is_empty() {
        return Err(CoreError::Validation("Owner id must not be empty".into()));
    }
    Ok(())
}

/// Validate a form name: non-blank and at most [`MAX_NAME_LEN`] characters.
pub fn validate_form_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Form name must not be empty".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Form name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a natural-language description submitted for generation.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.trim().is_empty() {
        return Err(CoreError::Validation(
            "Description must not be empty".into(),
        ));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a single question of a form tree.
///
/// `position` is the zero-based index of the question and is only used to make
/// the error message point at the offending entry.
pub fn validate_question(
    position: usize,
    text: &str,
    field_type: FieldType,
    option_count: usize,
) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Question {position} must have text"
        )));
    }
    if !field_type.is_choice() && option_count > 0 {
        return Err(CoreError::Validation(format!(
            "Question {position} has field type {field_type}, which does not take options"
        )));
    }
    if option_count > MAX_OPTIONS_PER_QUESTION {
        return Err(CoreError::Validation(format!(
            "Question {position} has {option_count} options; at most {MAX_OPTIONS_PER_QUESTION} allowed"
        )));
    }
    Ok(())
}

/// Validate a single option of a choice question.
pub fn validate_option(question: usize, text: &str, value: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() || value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Options of question {question} must have text and value"
        )));
    }
    Ok(())
}

/// Validate the number of questions in a tree.
pub fn validate_question_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_QUESTIONS {
        return Err(CoreError::Validation(format!(
            "A form may have at most {MAX_QUESTIONS} questions, got {count}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_storage_labels_round_trip() {
        for t in FieldType::ALL {
            assert_eq!(t.as_str().parse::<FieldType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_matches!("Slider".parse::<FieldType>(), Err(CoreError::Validation(_)));
        // Parsing is strict: lowercase labels are not storage labels.
        assert!("radiogroup".parse::<FieldType>().is_err());
    }

    #[test]
    fn test_choice_types() {
        let choice: Vec<_> = FieldType::ALL.into_iter().filter(|t| t.is_choice()).collect();
        assert_eq!(
            choice,
            vec![
                FieldType::SingleChoiceGroup,
                FieldType::MultiChoiceGroup,
                FieldType::SingleSelect
            ]
        );
        assert!(!FieldType::DEFAULT.is_choice());
    }

    #[test]
    fn test_serde_uses_storage_labels() {
        let json = serde_json::to_string(&FieldType::TextBlock).unwrap();
        assert_eq!(json, "\"Textarea\"");
        let parsed: FieldType = serde_json::from_str("\"CheckboxGroup\"").unwrap();
        assert_eq!(parsed, FieldType::MultiChoiceGroup);
        assert!(serde_json::from_str::<FieldType>("\"Rating\"").is_err());
    }

    #[test]
    fn test_blank_owner_rejected() {
        assert!(validate_owner_id("user-1").is_ok());
        assert_matches!(validate_owner_id(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_owner_id("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_description_limits() {
        assert!(validate_description("a short survey").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(" \n\t").is_err());
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(validate_description(&long).is_err());
    }

    #[test]
    fn test_form_name_limits() {
        assert!(validate_form_name("Feedback").is_ok());
        assert!(validate_form_name("").is_err());
        assert!(validate_form_name(&"n".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_non_choice_question_with_options_rejected() {
        let err = validate_question(2, "Comments", FieldType::TextBlock, 1).unwrap_err();
        assert!(err.to_string().contains("Question 2"));
        assert!(validate_question(0, "Comments", FieldType::TextBlock, 0).is_ok());
        assert!(validate_question(0, "Rating", FieldType::SingleChoiceGroup, 5).is_ok());
    }

    #[test]
    fn test_blank_question_text_rejected() {
        assert!(validate_question(0, " ", FieldType::TextLine, 0).is_err());
    }

    #[test]
    fn test_option_requires_text_and_value() {
        assert!(validate_option(0, "Yes", "yes").is_ok());
        assert!(validate_option(0, "", "yes").is_err());
        assert!(validate_option(0, "Yes", " ").is_err());
    }

    #[test]
    fn test_question_count_limit() {
        assert!(validate_question_count(MAX_QUESTIONS).is_ok());
        assert!(validate_question_count(MAX_QUESTIONS + 1).is_err());
    }
}
