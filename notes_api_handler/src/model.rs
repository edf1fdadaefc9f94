use serde::{Deserialize, Serialize};

/// Partition key shared by every note
pub const NOTE_PK: &str = "NOTE";

/// Prefix of every note sort key
pub const NOTE_SK_PREFIX: &str = "NOTE#";

/// Sort key for the given note id, `NOTE#<noteId>`
pub fn note_sk(note_id: &str) -> String {
    format!("{NOTE_SK_PREFIX}{note_id}")
}

/// A note as stored in DynamoDB and returned to clients
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "PK")]
    pub pk: String,
    #[serde(rename = "SK")]
    pub sk: String,
    pub note_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// ISO-8601, millisecond precision
    pub created_at: String,
    pub updated_at: String,
}

impl Note {
    /// Builds a brand new note, created and updated at `now`
    pub fn new(note_id: String, title: String, content: String, now: String) -> Self {
        Self {
            pk: NOTE_PK.to_string(),
            sk: note_sk(&note_id),
            note_id,
            title,
            content,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// `POST /notes` body, both fields trimmed and defaulted to empty
#[derive(Deserialize, Default, Debug)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// `PUT /notes/{noteId}` body, absent fields keep their stored value
#[derive(Deserialize, Default, Debug)]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// The attributes a `PUT` is allowed to change.
/// Fields left as `None` are not touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub updated_at: String,
}

/// `GET /notes` response, `{"items": [...]}`
#[derive(Serialize, Debug)]
pub struct NoteList {
    pub items: Vec<Note>,
}

/// Body of every non-2xx response
#[derive(Serialize, Debug)]
pub struct ErrorMessage<'a> {
    pub message: &'a str,
}

/// Current time in the format stored on notes, e.g. `2024-05-01T12:00:00.000Z`
pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
