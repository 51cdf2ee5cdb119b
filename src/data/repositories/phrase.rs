use diesel::prelude::*;

use crate::data::models::{NewPhrase, Phrase};
use crate::schema::phrases;

pub struct PhraseRepository;

impl PhraseRepository {
    /// Exact (case-insensitive) match against the column of `source_lang`.
    pub fn find_exact(
        conn: &mut SqliteConnection,
        text: &str,
        source_lang: &str,
    ) -> Result<Option<Phrase>, diesel::result::Error> {
        let query = phrases::table.into_boxed();

        let query = if source_lang == "burushaski" {
            query.filter(phrases::burushaski.like(text.to_string()))
        } else {
            query.filter(phrases::english.like(text.to_string()))
        };

        query.first::<Phrase>(conn).optional()
    }

    /// Example phrases, optionally narrowed to those mentioning `word`.
    pub fn examples(
        conn: &mut SqliteConnection,
        word: Option<&str>,
        limit: i64,
    ) -> Result<Vec<Phrase>, diesel::result::Error> {
        let mut query = phrases::table.into_boxed();

        if let Some(word) = word {
            let pattern = format!("%{}%", word);
            query = query.filter(
                phrases::burushaski
                    .like(pattern.clone())
                    .or(phrases::english.like(pattern)),
            );
        }

        query.limit(limit).load::<Phrase>(conn)
    }

    pub fn create(
        conn: &mut SqliteConnection,
        new_phrase: &NewPhrase,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(phrases::table)
            .values(new_phrase)
            .execute(conn)
    }
}
