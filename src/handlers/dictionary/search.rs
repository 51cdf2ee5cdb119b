use axum::extract::{Query, State};
use axum::Json;

use crate::data::models::{
    ApiError, SearchParams, SuggestParams, SuggestResponse, SuggestionEntry, Word,
};
use crate::data::repositories::WordRepository;
use crate::db::DbPool;
use crate::features::search::SearchEngine;
use crate::handlers::dictionary::validate_dialect;

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
const MAX_SEARCH_LIMIT: i64 = 500;
const DEFAULT_SUGGEST_LIMIT: i64 = 10;
const MAX_SUGGEST_LIMIT: i64 = 50;

/// Rows pulled from the LIKE prefilter before similarity ranking.
const CANDIDATE_POOL: i64 = 200;

/// GET /api/dictionary/search — keyword search over headword and glosses,
/// returned as a bare array ordered by relevance.
pub async fn search_words(
    State(pool): State<DbPool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
    if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_SEARCH_LIMIT
        )));
    }
    if let Some(dialect) = params.dialect.as_deref() {
        validate_dialect(dialect)?;
    }

    let mut conn = pool.get()?;
    let candidates =
        WordRepository::search(&mut conn, &params.q, params.dialect.as_deref(), CANDIDATE_POOL)?;

    log::debug!("search q={:?} matched {} candidates", params.q, candidates.len());

    let ranked = SearchEngine::rank(&params.q, candidates)
        .into_iter()
        .take(limit as usize)
        .collect();

    Ok(Json(ranked))
}

/// GET /api/dictionary/suggest — trimmed entries for autocomplete.
pub async fn suggest(
    State(pool): State<DbPool>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>, ApiError> {
    if params.q.is_empty() {
        return Err(ApiError::Validation("q must not be empty".to_string()));
    }
    let limit = params.limit.unwrap_or(DEFAULT_SUGGEST_LIMIT);
    if !(1..=MAX_SUGGEST_LIMIT).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_SUGGEST_LIMIT
        )));
    }

    let mut conn = pool.get()?;
    let words = WordRepository::suggest(&mut conn, &params.q, limit)?;

    let suggestions: Vec<SuggestionEntry> = words
        .into_iter()
        .map(|word| SuggestionEntry {
            id: word.id,
            burushaski: word.burushaski,
            english: word.english,
            pronunciation: word.pronunciation_ipa,
        })
        .collect();

    Ok(Json(SuggestResponse {
        query: params.q,
        count: suggestions.len(),
        suggestions,
    }))
}
