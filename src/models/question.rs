use serde::Deserialize;

/// One quiz item, loaded once and never mutated.
///
/// Deserialized from the external record shape
/// `{"prompt": ..., "options": [...], "correctOptionIndex": ...}`.
/// Content rules (at least two options, correct index in range) are
/// enforced when the engine loads the list, not at parse time.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option_index: usize,
}
