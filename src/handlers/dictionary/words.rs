use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::data::models::{
    ApiError, ByHeadwordParams, CountParams, CountResponse, DictionaryStats, NewWord, Word,
    WORD_CLASSES,
};
use crate::data::repositories::WordRepository;
use crate::db::DbPool;
use crate::handlers::dictionary::validate_dialect;

/// GET /api/dictionary/item/{id}
pub async fn get_word(
    State(pool): State<DbPool>,
    Path(word_id): Path<i32>,
) -> Result<Json<Word>, ApiError> {
    let mut conn = pool.get()?;
    let word = WordRepository::find_by_id(&mut conn, word_id)?.ok_or(ApiError::NotFound("Word"))?;
    Ok(Json(word))
}

/// GET /api/dictionary/by-burushaski — exact headword match.
pub async fn get_by_burushaski(
    State(pool): State<DbPool>,
    Query(params): Query<ByHeadwordParams>,
) -> Result<Json<Word>, ApiError> {
    let mut conn = pool.get()?;
    let word = WordRepository::find_by_burushaski(&mut conn, &params.text)?
        .ok_or(ApiError::NotFound("Word"))?;
    Ok(Json(word))
}

/// POST /api/dictionary — add a word, rejecting duplicate headwords.
pub async fn create_word(
    State(pool): State<DbPool>,
    Json(payload): Json<NewWord>,
) -> Result<(StatusCode, Json<Word>), ApiError> {
    if payload.burushaski.trim().is_empty() || payload.english.trim().is_empty() {
        return Err(ApiError::Validation(
            "burushaski and english are required".to_string(),
        ));
    }
    validate_dialect(&payload.dialect)?;
    if let Some(word_class) = payload.word_class.as_deref() {
        if !WORD_CLASSES.contains(&word_class) {
            return Err(ApiError::Validation(format!(
                "word_class must be one of {:?}",
                WORD_CLASSES
            )));
        }
    }

    let mut conn = pool.get()?;
    if WordRepository::find_by_burushaski(&mut conn, &payload.burushaski)?.is_some() {
        return Err(ApiError::DuplicateHeadword(payload.burushaski));
    }

    let word = WordRepository::create(&mut conn, &payload)?;
    log::info!("added word {} = {}", word.burushaski, word.english);
    Ok((StatusCode::CREATED, Json(word)))
}

/// GET /api/dictionary/count
pub async fn count_words(
    State(pool): State<DbPool>,
    Query(params): Query<CountParams>,
) -> Result<Json<CountResponse>, ApiError> {
    if let Some(dialect) = params.dialect.as_deref() {
        validate_dialect(dialect)?;
    }

    let mut conn = pool.get()?;
    let total =
        WordRepository::count(&mut conn, params.q.as_deref(), params.dialect.as_deref())?;
    Ok(Json(CountResponse { total }))
}

/// GET /api/dictionary/random — one entry for practice.
pub async fn random_word(State(pool): State<DbPool>) -> Result<Json<Word>, ApiError> {
    let mut conn = pool.get()?;
    let word = WordRepository::random(&mut conn)?.ok_or(ApiError::NotFound("Word"))?;
    Ok(Json(word))
}

/// GET /api/dictionary/stats
pub async fn stats(State(pool): State<DbPool>) -> Result<Json<DictionaryStats>, ApiError> {
    let mut conn = pool.get()?;
    Ok(Json(WordRepository::stats(&mut conn)?))
}
