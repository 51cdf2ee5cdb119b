use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{DialectCounts, DictionaryStats, NewWord, Word};
use crate::schema::words;

pub struct WordRepository;

impl WordRepository {
    /// Substring match across the headword and both glosses, optionally
    /// narrowed to one dialect. SQLite LIKE is case-insensitive for ASCII,
    /// which mirrors the old backend's ILIKE.
    pub fn search(
        conn: &mut SqliteConnection,
        term: &str,
        dialect: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Word>, diesel::result::Error> {
        let pattern = format!("%{}%", term);
        let mut query = words::table.into_boxed();

        query = query.filter(
            words::burushaski
                .like(pattern.clone())
                .or(words::english.like(pattern.clone()))
                .or(words::urdu.like(pattern)),
        );

        if let Some(dialect) = dialect {
            query = query.filter(words::dialect.eq(dialect.to_string()));
        }

        query.limit(limit).load::<Word>(conn)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        word_id: i32,
    ) -> Result<Option<Word>, diesel::result::Error> {
        words::table
            .filter(words::id.eq(word_id))
            .first::<Word>(conn)
            .optional()
    }

    /// Exact headword lookup. LIKE without wildcards gives the
    /// case-insensitive equality the old backend relied on.
    pub fn find_by_burushaski(
        conn: &mut SqliteConnection,
        text: &str,
    ) -> Result<Option<Word>, diesel::result::Error> {
        words::table
            .filter(words::burushaski.like(text.to_string()))
            .first::<Word>(conn)
            .optional()
    }

    pub fn find_by_english(
        conn: &mut SqliteConnection,
        text: &str,
    ) -> Result<Option<Word>, diesel::result::Error> {
        words::table
            .filter(words::english.like(text.to_string()))
            .first::<Word>(conn)
            .optional()
    }

    pub fn create(
        conn: &mut SqliteConnection,
        new_word: &NewWord,
    ) -> Result<Word, diesel::result::Error> {
        diesel::insert_into(words::table)
            .values(new_word)
            .execute(conn)?;

        let word_id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
            .get_result::<i32>(conn)?;

        words::table
            .filter(words::id.eq(word_id))
            .first::<Word>(conn)
    }

    pub fn count(
        conn: &mut SqliteConnection,
        term: Option<&str>,
        dialect: Option<&str>,
    ) -> Result<i64, diesel::result::Error> {
        let mut query = words::table.into_boxed();

        if let Some(term) = term {
            let pattern = format!("%{}%", term);
            query = query.filter(
                words::burushaski
                    .like(pattern.clone())
                    .or(words::english.like(pattern)),
            );
        }

        if let Some(dialect) = dialect {
            query = query.filter(words::dialect.eq(dialect.to_string()));
        }

        query.count().get_result(conn)
    }

    pub fn random(
        conn: &mut SqliteConnection,
    ) -> Result<Option<Word>, diesel::result::Error> {
        words::table
            .order(diesel::dsl::sql::<Integer>("RANDOM()"))
            .first::<Word>(conn)
            .optional()
    }

    /// Prefix/substring candidates for autocomplete, headword and English only.
    pub fn suggest(
        conn: &mut SqliteConnection,
        term: &str,
        limit: i64,
    ) -> Result<Vec<Word>, diesel::result::Error> {
        let pattern = format!("%{}%", term);
        words::table
            .filter(
                words::burushaski
                    .like(pattern.clone())
                    .or(words::english.like(pattern)),
            )
            .limit(limit)
            .load::<Word>(conn)
    }

    /// Candidates for fuzzy did-you-mean suggestions, restricted to the
    /// column of the source language.
    pub fn fuzzy_candidates(
        conn: &mut SqliteConnection,
        term: &str,
        source_lang: &str,
        limit: i64,
    ) -> Result<Vec<Word>, diesel::result::Error> {
        let pattern = format!("%{}%", term);
        let query = words::table.into_boxed();

        let query = if source_lang == "burushaski" {
            query.filter(words::burushaski.like(pattern))
        } else {
            query.filter(words::english.like(pattern))
        };

        query.limit(limit).load::<Word>(conn)
    }

    pub fn stats(conn: &mut SqliteConnection) -> Result<DictionaryStats, diesel::result::Error> {
        let total_words: i64 = words::table.count().get_result(conn)?;
        let verified_words: i64 = words::table
            .filter(words::verified.eq(true))
            .count()
            .get_result(conn)?;
        let words_with_audio: i64 = words::table
            .filter(words::audio_file.is_not_null())
            .count()
            .get_result(conn)?;

        let dialect_count = |conn: &mut SqliteConnection, dialect: &str| {
            words::table
                .filter(words::dialect.eq(dialect.to_string()))
                .count()
                .get_result::<i64>(conn)
        };

        let by_dialect = DialectCounts {
            hunza: dialect_count(conn, "hunza")?,
            nagar: dialect_count(conn, "nagar")?,
            yasin: dialect_count(conn, "yasin")?,
        };

        let completion_percentage = if total_words > 0 {
            (verified_words as f64 / total_words as f64 * 10_000.0).round() / 100.0
        } else {
            0.0
        };

        Ok(DictionaryStats {
            total_words,
            verified_words,
            words_with_audio,
            by_dialect,
            completion_percentage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_conn() -> SqliteConnection {
        let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
        db::init_schema(&mut conn).unwrap();
        db::seed_words(&mut conn).unwrap();
        conn
    }

    #[test]
    fn search_matches_headword_and_glosses() {
        let mut conn = test_conn();

        let by_headword = WordRepository::search(&mut conn, "harís", None, 20).unwrap();
        assert_eq!(by_headword.len(), 1);
        assert_eq!(by_headword[0].english, "bread");

        let by_english = WordRepository::search(&mut conn, "water", None, 20).unwrap();
        assert_eq!(by_english.len(), 1);
        assert_eq!(by_english[0].burushaski, "ćo");

        let by_urdu = WordRepository::search(&mut conn, "پانی", None, 20).unwrap();
        assert_eq!(by_urdu.len(), 1);
        assert_eq!(by_urdu[0].burushaski, "ćo");
    }

    #[test]
    fn search_is_case_insensitive_for_ascii() {
        let mut conn = test_conn();
        let results = WordRepository::search(&mut conn, "WATER", None, 20).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn search_respects_limit_and_dialect() {
        let mut conn = test_conn();

        let limited = WordRepository::search(&mut conn, "a", None, 2).unwrap();
        assert!(limited.len() <= 2);

        let nagar = WordRepository::search(&mut conn, "water", Some("nagar"), 20).unwrap();
        assert!(nagar.is_empty());
    }

    #[test]
    fn find_by_burushaski_is_exact() {
        let mut conn = test_conn();

        let hit = WordRepository::find_by_burushaski(&mut conn, "thili").unwrap();
        assert_eq!(hit.unwrap().english, "thank you");

        // A substring must not match.
        let miss = WordRepository::find_by_burushaski(&mut conn, "thil").unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn count_with_and_without_filter() {
        let mut conn = test_conn();

        let all = WordRepository::count(&mut conn, None, None).unwrap();
        assert_eq!(all, 8);

        let filtered = WordRepository::count(&mut conn, Some("water"), None).unwrap();
        assert_eq!(filtered, 1);
    }

    #[test]
    fn random_returns_some_seeded_word() {
        let mut conn = test_conn();
        let word = WordRepository::random(&mut conn).unwrap();
        assert!(word.is_some());
    }

    #[test]
    fn create_assigns_id_and_reloads_row() {
        let mut conn = test_conn();

        let word = WordRepository::create(
            &mut conn,
            &NewWord {
                burushaski: "huk".to_string(),
                english: "dog".to_string(),
                urdu: Some("کتا".to_string()),
                word_class: Some("x-class".to_string()),
                dialect: "hunza".to_string(),
                pronunciation_ipa: None,
                audio_file: None,
                example_sentence: None,
                example_translation: None,
                notes: None,
            },
        )
        .unwrap();

        assert!(word.id > 0);
        assert!(!word.verified);
        assert_eq!(word.english, "dog");
    }
}
