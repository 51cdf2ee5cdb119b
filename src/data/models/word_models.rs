use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::words;

pub const DIALECTS: [&str; 3] = ["hunza", "nagar", "yasin"];
pub const WORD_CLASSES: [&str; 3] = ["h-class", "y-class", "x-class"];

/// A dictionary headword with its English and Urdu glosses.
#[derive(Debug, Clone, Queryable, Selectable, Serialize)]
#[diesel(table_name = words)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Word {
    pub id: i32,
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub word_class: Option<String>,
    pub dialect: String,
    pub pronunciation_ipa: Option<String>,
    pub audio_file: Option<String>,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub notes: Option<String>,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable payload, doubling as the create-word request body.
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = words)]
pub struct NewWord {
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub word_class: Option<String>,
    #[serde(default = "default_dialect")]
    pub dialect: String,
    pub pronunciation_ipa: Option<String>,
    pub audio_file: Option<String>,
    pub example_sentence: Option<String>,
    pub example_translation: Option<String>,
    pub notes: Option<String>,
}

fn default_dialect() -> String {
    "hunza".to_string()
}
