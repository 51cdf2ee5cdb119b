use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use crate::data::models::{
    ApiError, BatchTranslationRequest, BatchTranslationResponse, ExamplesParams, ExamplesResponse,
    PhraseExample, QuickParams, TranslationRequest, TranslationResponse, SOURCE_LANGS,
};
use crate::data::repositories::PhraseRepository;
use crate::db::DbPool;
use crate::features::translate::Translator;

const DEFAULT_EXAMPLES_LIMIT: i64 = 10;
const MAX_EXAMPLES_LIMIT: i64 = 50;

fn validate_source_lang(source: &str) -> Result<(), ApiError> {
    if SOURCE_LANGS.contains(&source) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "source must be one of {:?}",
            SOURCE_LANGS
        )))
    }
}

fn validate_target_lang(target: &str) -> Result<(), ApiError> {
    if target == "burushaski" || target == "english" {
        Ok(())
    } else {
        Err(ApiError::Validation(
            "target must be \"burushaski\" or \"english\"".to_string(),
        ))
    }
}

/// POST /api/translate — body `{text, source, target}`. The engine derives
/// the target from the resolved source language; an explicit target is
/// validated but not used to force a direction.
pub async fn translate_text(
    State(pool): State<DbPool>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    request.validate()?;
    validate_source_lang(&request.source)?;
    validate_target_lang(&request.target)?;

    let mut conn = pool.get()?;
    let result = Translator::new(&mut conn).translate(&request.text, &request.source)?;
    log::debug!(
        "translate {:?} via {} (confidence {})",
        request.text,
        result.method,
        result.confidence
    );
    Ok(Json(result))
}

/// GET /api/translate/quick/{text} — convenience lookup for browser testing.
pub async fn quick_translate(
    State(pool): State<DbPool>,
    Path(text): Path<String>,
    Query(params): Query<QuickParams>,
) -> Result<Json<TranslationResponse>, ApiError> {
    validate_source_lang(&params.source)?;

    let mut conn = pool.get()?;
    let result = Translator::new(&mut conn).translate(&text, &params.source)?;
    Ok(Json(result))
}

/// POST /api/translate/batch — up to 50 texts in one call.
pub async fn batch_translate(
    State(pool): State<DbPool>,
    Json(request): Json<BatchTranslationRequest>,
) -> Result<Json<BatchTranslationResponse>, ApiError> {
    request.validate()?;
    validate_source_lang(&request.source)?;

    let mut conn = pool.get()?;
    let results = Translator::new(&mut conn).batch_translate(&request.texts, &request.source)?;

    let successful = results
        .iter()
        .filter(|result| result.translation.is_some())
        .count();

    Ok(Json(BatchTranslationResponse {
        total: results.len(),
        successful,
        failed: results.len() - successful,
        results,
    }))
}

/// GET /api/translate/examples — phrase examples, optionally filtered.
pub async fn translation_examples(
    State(pool): State<DbPool>,
    Query(params): Query<ExamplesParams>,
) -> Result<Json<ExamplesResponse>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_EXAMPLES_LIMIT);
    if !(1..=MAX_EXAMPLES_LIMIT).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit must be between 1 and {}",
            MAX_EXAMPLES_LIMIT
        )));
    }

    let mut conn = pool.get()?;
    let phrases = PhraseRepository::examples(&mut conn, params.word.as_deref(), limit)?;

    let examples: Vec<PhraseExample> = phrases
        .into_iter()
        .map(|phrase| PhraseExample {
            burushaski: phrase.burushaski,
            english: phrase.english,
            urdu: phrase.urdu,
            context: phrase.context,
            formality: phrase.formality,
        })
        .collect();

    Ok(Json(ExamplesResponse {
        count: examples.len(),
        examples,
    }))
}
