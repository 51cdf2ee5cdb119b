use serde::{Deserialize, Serialize};
use validator::Validate;

pub const SOURCE_LANGS: [&str; 3] = ["auto", "burushaski", "english"];

#[derive(Debug, Deserialize, Validate)]
pub struct TranslationRequest {
    #[validate(length(min = 1, max = 500, message = "text must be 1-500 characters"))]
    pub text: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_target")]
    pub target: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct BatchTranslationRequest {
    #[validate(length(min = 1, max = 50, message = "batch must contain 1-50 texts"))]
    pub texts: Vec<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "auto".to_string()
}

fn default_target() -> String {
    "english".to_string()
}

/// One translation outcome. `method` names the strategy that produced it;
/// metadata fields are filled only when the matched row carries them.
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub translation: Option<String>,
    pub source: String,
    pub source_language: String,
    pub target_language: String,
    pub method: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urdu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words_found: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<TranslationSuggestion>>,
}

impl TranslationResponse {
    /// Empty result scaffold; strategies fill in what they found.
    pub fn not_found(source: &str, source_language: &str, target_language: &str) -> Self {
        Self {
            translation: None,
            source: source.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            method: "none".to_string(),
            confidence: 0.0,
            urdu: None,
            pronunciation: None,
            word_class: None,
            example: None,
            example_translation: None,
            audio: None,
            words_found: None,
            total_words: None,
            note: None,
            message: None,
            suggestions: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TranslationSuggestion {
    pub burushaski: String,
    pub english: String,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchTranslationResponse {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<TranslationResponse>,
}

#[derive(Debug, Deserialize)]
pub struct QuickParams {
    #[serde(default = "default_source")]
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct ExamplesParams {
    pub word: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PhraseExample {
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub context: Option<String>,
    pub formality: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub count: usize,
    pub examples: Vec<PhraseExample>,
}
