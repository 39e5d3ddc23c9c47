//! Normalization of generator output onto the store's strongly typed tree.
//!
//! Policy: prefer producing a usable form over rejecting the request.
//! Unrecognized field-type labels become [`FieldType::DEFAULT`], options on
//! non-choice questions are dropped, and blank entries are skipped. Only a
//! candidate with no usable question at all is rejected.

use std::collections::HashSet;

use formgen_core::form::{FieldType, MAX_NAME_LEN, MAX_OPTIONS_PER_QUESTION, MAX_QUESTIONS};
use formgen_core::generation::GenerationError;
use formgen_db::models::field_option::NewFieldOption;
use formgen_db::models::form::CreateFormTree;
use formgen_db::models::question::NewQuestion;

use crate::candidate::{CandidateForm, CandidateQuestion};

/// Length of a form name derived from the description when the generator
/// did not supply one.
const DERIVED_NAME_LEN: usize = 60;

/// A normalized tree plus counters describing what normalization changed.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub tree: CreateFormTree,
    /// Labels that were missing or not recognized and fell back to the default.
    pub defaulted_labels: usize,
    /// Options removed from non-choice questions.
    pub stripped_options: usize,
    /// Questions skipped for blank text or past [`MAX_QUESTIONS`].
    pub dropped_questions: usize,
}

/// Map a free-form field-type label onto the closed enumeration.
///
/// Matching ignores case and punctuation, so `"radio-group"`, `"Radio Group"`
/// and `"RadioGroup"` are equivalent. Returns `None` for labels with no known
/// mapping.
pub fn map_field_type(label: &str) -> Option<FieldType> {
    let key: String = label
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();

    let field_type = match key.as_str() {
        "radiogroup" | "radio" | "radiobutton" | "radiobuttons" | "singlechoice"
        | "singlechoicegroup" | "multiplechoice" | "rating" | "scale" | "likert" => {
            FieldType::SingleChoiceGroup
        }
        "checkboxgroup" | "checkbox" | "checkboxes" | "multichoice" | "multichoicegroup"
        | "multiselect" | "multipleselect" => FieldType::MultiChoiceGroup,
        "select" | "dropdown" | "singleselect" | "combobox" | "picklist" => FieldType::SingleSelect,
        "input" | "text" | "textinput" | "textline" | "textfield" | "shorttext" | "shortanswer"
        | "string" | "email" | "number" | "phone" | "tel" | "url" | "date" => FieldType::TextLine,
        "textarea" | "textblock" | "longtext" | "longanswer" | "paragraph" | "multilinetext"
        | "comment" | "comments" => FieldType::TextBlock,
        "switch" | "toggle" | "boolean" | "bool" | "yesno" => FieldType::Toggle,
        _ => return None,
    };
    Some(field_type)
}

/// Normalize a parsed candidate into a tree the store will accept.
///
/// `description` is the user's original text; it backs the form's name and
/// description when the generator left them out.
pub fn normalize(
    candidate: CandidateForm,
    owner_id: &str,
    description: &str,
) -> Result<Normalized, GenerationError> {
    let mut defaulted_labels = 0;
    let mut stripped_options = 0;
    let mut dropped_questions = 0;

    let mut questions = Vec::new();
    for candidate_question in candidate.questions.unwrap_or_default() {
        if questions.len() == MAX_QUESTIONS {
            dropped_questions += 1;
            continue;
        }
        match normalize_question(candidate_question, &mut defaulted_labels, &mut stripped_options)
        {
            Some(question) => questions.push(question),
            None => dropped_questions += 1,
        }
    }

    if questions.is_empty() {
        return Err(GenerationError::InvalidContent(
            "generated form has no usable questions".into(),
        ));
    }

    let name = candidate
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| truncate(n, MAX_NAME_LEN))
        .unwrap_or_else(|| derive_name(description));

    let form_description = candidate
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| description.trim().to_string());

    Ok(Normalized {
        tree: CreateFormTree {
            owner_id: owner_id.to_string(),
            name,
            description: Some(form_description),
            questions,
        },
        defaulted_labels,
        stripped_options,
        dropped_questions,
    })
}

fn normalize_question(
    candidate: CandidateQuestion,
    defaulted_labels: &mut usize,
    stripped_options: &mut usize,
) -> Option<NewQuestion> {
    let text = candidate.text.as_deref().map(str::trim).unwrap_or_default();
    if text.is_empty() {
        return None;
    }

    let mut field_type = match candidate.field_type.as_deref().and_then(map_field_type) {
        Some(t) => t,
        None => {
            *defaulted_labels += 1;
            FieldType::DEFAULT
        }
    };

    let raw_options = candidate.options.unwrap_or_default();
    let options = if field_type.is_choice() {
        let mut seen = HashSet::new();
        raw_options
            .iter()
            .map(|o| o.text_and_value())
            .filter_map(|(text, value)| {
                let (text, value) = (text.trim().to_string(), value.trim().to_string());
                (!text.is_empty() && !value.is_empty()).then_some(NewFieldOption { text, value })
            })
            .filter(|o| seen.insert(o.value.clone()))
            .take(MAX_OPTIONS_PER_QUESTION)
            .collect()
    } else {
        *stripped_options += raw_options.len();
        Vec::new()
    };

    // A choice question with nothing to choose cannot be answered; keep the
    // prompt as free text instead.
    if field_type.is_choice() && options.is_empty() {
        field_type = FieldType::DEFAULT;
    }

    Some(NewQuestion {
        text: text.to_string(),
        field_type,
        options,
    })
}

fn derive_name(description: &str) -> String {
    let first_line = description.trim().lines().next().unwrap_or_default().trim();
    truncate(first_line, DERIVED_NAME_LEN)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect::<String>().trim_end().to_string()
}
