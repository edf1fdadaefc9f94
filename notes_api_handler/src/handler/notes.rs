use lambda_http::{Body, Request, Response, http::StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    model::{CreateNoteRequest, Note, NoteList, NoteUpdate, UpdateNoteRequest, timestamp_now},
    response,
    service::db::{NoteStoreError, NotesTable},
};

/// Parses the request body, an absent or empty body is `T::default()`.
/// Returns `None` unless the body is a JSON object that fits `T`.
fn parse_body<T: DeserializeOwned + Default>(request: &Request) -> Option<T> {
    let bytes: &[u8] = request.body().as_ref();
    if bytes.is_empty() {
        return Some(T::default());
    }

    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = ?e, "request body is not JSON");
            return None;
        }
    };

    // derived visitors also accept sequences, filling fields by position
    if !value.is_object() {
        tracing::warn!("request body is not a JSON object");
        return None;
    }

    match serde_json::from_value(value) {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::warn!(error = ?e, "unable to parse request body");
            None
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn create_note(db: &NotesTable, request: &Request) -> anyhow::Result<Response<Body>> {
    let Some(body) = parse_body::<CreateNoteRequest>(request) else {
        return response::bad_request("invalid JSON body");
    };

    let title = body.title.unwrap_or_default().trim().to_string();
    let content = body.content.unwrap_or_default().trim().to_string();

    if title.is_empty() {
        return response::bad_request("title is required");
    }

    let note = Note::new(
        uuid::Uuid::new_v4().to_string(),
        title,
        content,
        timestamp_now(),
    );

    db.put_note(&note).await?;

    tracing::info!(note_id = %note.note_id, "created note");

    response::json(StatusCode::CREATED, &note)
}

#[tracing::instrument(skip_all)]
pub async fn list_notes(db: &NotesTable) -> anyhow::Result<Response<Body>> {
    let items = db.list_notes().await?;

    response::json(StatusCode::OK, &NoteList { items })
}

#[tracing::instrument(skip(db))]
pub async fn get_note(db: &NotesTable, note_id: &str) -> anyhow::Result<Response<Body>> {
    match db.get_note(note_id).await {
        Ok(note) => response::json(StatusCode::OK, &note),
        Err(NoteStoreError::NotFound) => response::not_found(),
        Err(NoteStoreError::Other(e)) => Err(e),
    }
}

#[tracing::instrument(skip(db, request))]
pub async fn update_note(
    db: &NotesTable,
    request: &Request,
    note_id: &str,
) -> anyhow::Result<Response<Body>> {
    let Some(body) = parse_body::<UpdateNoteRequest>(request) else {
        return response::bad_request("invalid JSON body");
    };

    let update = NoteUpdate {
        title: body.title.map(|title| title.trim().to_string()),
        content: body.content.map(|content| content.trim().to_string()),
        updated_at: timestamp_now(),
    };

    match db.update_note(note_id, &update).await {
        Ok(note) => response::json(StatusCode::OK, &note),
        Err(NoteStoreError::NotFound) => response::not_found(),
        Err(NoteStoreError::Other(e)) => Err(e),
    }
}

#[tracing::instrument(skip(db))]
pub async fn delete_note(db: &NotesTable, note_id: &str) -> anyhow::Result<Response<Body>> {
    match db.delete_note(note_id).await {
        Ok(()) => response::no_content(),
        Err(NoteStoreError::NotFound) => response::not_found(),
        Err(NoteStoreError::Other(e)) => Err(e),
    }
}
