use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};

use crate::schema::phrases;

/// A fixed expression with context metadata, matched ahead of single words
/// during translation.
#[derive(Debug, Clone, Queryable, Selectable, Serialize)]
#[diesel(table_name = phrases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Phrase {
    pub id: i32,
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub context: Option<String>,
    pub formality: Option<String>,
    pub dialect: String,
    pub audio_file: Option<String>,
    pub usage_notes: Option<String>,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = phrases)]
pub struct NewPhrase {
    pub burushaski: String,
    pub english: String,
    pub urdu: Option<String>,
    pub context: Option<String>,
    pub formality: Option<String>,
    #[serde(default = "default_dialect")]
    pub dialect: String,
    pub usage_notes: Option<String>,
}

fn default_dialect() -> String {
    "hunza".to_string()
}
