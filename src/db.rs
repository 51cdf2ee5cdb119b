use anyhow::Context;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::schema::words;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const DDL: &str = "
CREATE TABLE IF NOT EXISTS words (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    burushaski TEXT NOT NULL UNIQUE,
    english TEXT NOT NULL,
    urdu TEXT,
    word_class TEXT,
    dialect TEXT NOT NULL DEFAULT 'hunza',
    pronunciation_ipa TEXT,
    audio_file TEXT,
    example_sentence TEXT,
    example_translation TEXT,
    notes TEXT,
    verified BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
CREATE INDEX IF NOT EXISTS idx_words_burushaski ON words (burushaski);
CREATE INDEX IF NOT EXISTS idx_words_english ON words (english);

CREATE TABLE IF NOT EXISTS phrases (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    burushaski TEXT NOT NULL,
    english TEXT NOT NULL,
    urdu TEXT,
    context TEXT,
    formality TEXT,
    dialect TEXT NOT NULL DEFAULT 'hunza',
    audio_file TEXT,
    usage_notes TEXT,
    verified BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";

pub fn init_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .context("Failed to create DB pool")
}

/// Create tables and indexes if missing. Safe to run on every startup.
pub fn init_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(DDL)
}

#[derive(Insertable)]
#[diesel(table_name = words)]
struct SeedWord<'a> {
    burushaski: &'a str,
    english: &'a str,
    urdu: Option<&'a str>,
    word_class: Option<&'a str>,
    dialect: &'a str,
    pronunciation_ipa: Option<&'a str>,
    example_sentence: Option<&'a str>,
    example_translation: Option<&'a str>,
    notes: Option<&'a str>,
    verified: bool,
}

const SEED_WORDS: [SeedWord<'static>; 8] = [
    SeedWord {
        burushaski: "be bila?",
        english: "How are you?",
        urdu: Some("آپ کیسے ہیں؟"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("be bila"),
        example_sentence: None,
        example_translation: None,
        notes: Some("Informal greeting"),
        verified: true,
    },
    SeedWord {
        burushaski: "áa",
        english: "yes",
        urdu: Some("ہاں"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("aː"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "béé",
        english: "no",
        urdu: Some("نہیں"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("beː"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "ćo",
        english: "water",
        urdu: Some("پانی"),
        word_class: Some("y-class"),
        dialect: "hunza",
        pronunciation_ipa: Some("tʃo"),
        example_sentence: Some("a ćo guséṭam"),
        example_translation: Some("I drink water"),
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "harís",
        english: "bread",
        urdu: Some("روٹی"),
        word_class: Some("x-class"),
        dialect: "hunza",
        pronunciation_ipa: Some("haris"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "hík",
        english: "one",
        urdu: Some("ایک"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("hik"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "altó",
        english: "two",
        urdu: Some("دو"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("alto"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
    SeedWord {
        burushaski: "thili",
        english: "thank you",
        urdu: Some("شکریہ"),
        word_class: None,
        dialect: "hunza",
        pronunciation_ipa: Some("θili"),
        example_sentence: None,
        example_translation: None,
        notes: None,
        verified: true,
    },
];

/// Load the starter vocabulary, skipping headwords that already exist.
/// Returns the number of rows actually inserted.
pub fn seed_words(conn: &mut SqliteConnection) -> QueryResult<usize> {
    let mut inserted = 0;
    for word in &SEED_WORDS {
        inserted += diesel::insert_or_ignore_into(words::table)
            .values(word)
            .execute(conn)?;
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::repositories::WordRepository;

    fn memory_conn() -> SqliteConnection {
        SqliteConnection::establish(":memory:").expect("in-memory sqlite")
    }

    #[test]
    fn init_schema_is_idempotent() {
        let mut conn = memory_conn();
        init_schema(&mut conn).unwrap();
        init_schema(&mut conn).unwrap();
    }

    #[test]
    fn seed_inserts_once() {
        let mut conn = memory_conn();
        init_schema(&mut conn).unwrap();

        let first = seed_words(&mut conn).unwrap();
        assert_eq!(first, SEED_WORDS.len());

        // Re-seeding must not duplicate headwords.
        let second = seed_words(&mut conn).unwrap();
        assert_eq!(second, 0);

        let water = WordRepository::find_by_burushaski(&mut conn, "ćo")
            .unwrap()
            .expect("seeded word");
        assert_eq!(water.english, "water");
        assert!(water.verified);
    }
}
