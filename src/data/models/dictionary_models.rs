use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<i64>,
    pub dialect: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ByHeadwordParams {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub q: String,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CountParams {
    pub q: Option<String>,
    pub dialect: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub total: i64,
}

/// Trimmed-down entry for autocomplete dropdowns.
#[derive(Debug, Serialize)]
pub struct SuggestionEntry {
    pub id: i32,
    pub burushaski: String,
    pub english: String,
    pub pronunciation: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub count: usize,
    pub suggestions: Vec<SuggestionEntry>,
}

#[derive(Debug, Serialize)]
pub struct DialectCounts {
    pub hunza: i64,
    pub nagar: i64,
    pub yasin: i64,
}

#[derive(Debug, Serialize)]
pub struct DictionaryStats {
    pub total_words: i64,
    pub verified_words: i64,
    pub words_with_audio: i64,
    pub by_dialect: DialectCounts,
    pub completion_percentage: f64,
}
