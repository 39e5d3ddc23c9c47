//! Instructions sent to the model with each description.

/// System prompt describing the JSON shape the pipeline understands.
pub const FORM_GENERATION_PROMPT: &str = r#"You design web forms. Given a description of a form, reply with ONLY a JSON object of this shape and no other text:

{
  "name": "<short form title>",
  "description": "<one sentence describing the form>",
  "questions": [
    {
      "text": "<the question shown to respondents>",
      "fieldType": "<one of: RadioGroup, CheckboxGroup, Select, Input, Textarea, Switch>",
      "fieldOptions": [ { "text": "<label>", "value": "<machine value>" } ]
    }
  ]
}

Rules:
- RadioGroup: pick exactly one option. CheckboxGroup: pick any number. Select: dropdown with one choice.
- Input: a single line of text. Textarea: longer free text. Switch: yes/no toggle.
- Only RadioGroup, CheckboxGroup and Select questions have fieldOptions; omit it for the others.
- Ratings on a numeric scale are RadioGroup questions with one option per step.
- Keep the form focused: ask only what the description needs."#;

/// Build the user message for a description.
pub fn build_user_message(description: &str) -> String {
    format!("Form description:\n{}", description.trim())
}
