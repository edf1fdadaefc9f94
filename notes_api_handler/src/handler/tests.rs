use std::collections::HashMap;

use lambda_http::{
    Body, Request, RequestExt, Response,
    http::{StatusCode, header::CONTENT_TYPE},
};
use mockall::predicate::eq;

use super::*;
use crate::{
    model::Note,
    service::db::{NoteStoreError, NotesTable},
};

const NOW: &str = "2024-05-01T12:00:00.000Z";

fn request(method: &str, path: &str, body: Option<&str>) -> Request {
    let body = body.map(|b| Body::from(b.to_string())).unwrap_or(Body::Empty);
    lambda_http::http::Request::builder()
        .method(method)
        .uri(path)
        .body(body)
        .unwrap()
}

fn note_request(method: &str, note_id: &str, body: Option<&str>) -> Request {
    request(method, &format!("/notes/{note_id}"), body).with_path_parameters(HashMap::from([(
        "noteId".to_string(),
        note_id.to_string(),
    )]))
}

fn note(note_id: &str, title: &str) -> Note {
    Note::new(
        note_id.to_string(),
        title.to_string(),
        "content".to_string(),
        NOW.to_string(),
    )
}

fn body_json(response: &Response<Body>) -> serde_json::Value {
    serde_json::from_slice(response.body().as_ref()).unwrap()
}

fn assert_json_content_type(response: &Response<Body>) {
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "application/json"
    );
}

#[test]
fn resolves_routes() {
    assert_eq!(
        Route::from_request(&request("POST", "/notes", None)),
        Route::CreateNote
    );
    assert_eq!(
        Route::from_request(&request("GET", "/notes", None)),
        Route::ListNotes
    );
    assert_eq!(
        Route::from_request(&note_request("GET", "abc", None)),
        Route::GetNote("abc".to_string())
    );
    assert_eq!(
        Route::from_request(&note_request("PUT", "abc", None)),
        Route::UpdateNote("abc".to_string())
    );
    assert_eq!(
        Route::from_request(&note_request("DELETE", "abc", None)),
        Route::DeleteNote("abc".to_string())
    );
}

#[test]
fn falls_back_to_path_for_note_id() {
    assert_eq!(
        Route::from_request(&request("GET", "/notes/xyz", None)),
        Route::GetNote("xyz".to_string())
    );
    assert_eq!(
        Route::from_request(&request("GET", "/notes/xyz/extra", None)),
        Route::NotFound
    );
}

#[test]
fn unknown_routes() {
    assert_eq!(
        Route::from_request(&request("DELETE", "/notes", None)),
        Route::NotFound
    );
    assert_eq!(
        Route::from_request(&request("GET", "/other", None)),
        Route::NotFound
    );
    assert_eq!(
        Route::from_request(&note_request("PATCH", "abc", None)),
        Route::NotFound
    );
}

#[tokio::test]
async fn create_note_trims_and_stores() {
    let mut db = NotesTable::default();
    db.expect_put_note()
        .withf(|note: &Note| {
            note.title == "hello"
                && note.content == "world"
                && note.pk == "NOTE"
                && note.sk == format!("NOTE#{}", note.note_id)
                && note.created_at == note.updated_at
        })
        .times(1)
        .returning(|_| Ok(()));

    let response = handler(
        &db,
        request(
            "POST",
            "/notes",
            Some(r#"{"title":"  hello ","content":" world  "}"#),
        ),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_json_content_type(&response);
    let body = body_json(&response);
    assert_eq!(body["title"], "hello");
    assert_eq!(body["content"], "world");
    assert!(uuid::Uuid::parse_str(body["noteId"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn create_note_requires_title() {
    let mut db = NotesTable::default();
    db.expect_put_note().never();

    for body in [None, Some("{}"), Some(r#"{"title":"   "}"#), Some(r#"{"title":null}"#)] {
        let response = handler(&db, request("POST", "/notes", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&response),
            serde_json::json!({ "message": "title is required" })
        );
    }
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let mut db = NotesTable::default();
    db.expect_put_note().never();
    db.expect_update_note().never();

    let response = handler(&db, request("POST", "/notes", Some("{not json")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(&response),
        serde_json::json!({ "message": "invalid JSON body" })
    );

    let response = handler(&db, note_request("PUT", "abc", Some(r#"{"title":5}"#)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_object_bodies_are_bad_requests() {
    let mut db = NotesTable::default();
    db.expect_put_note().never();
    db.expect_update_note().never();

    for body in [r#"["x"]"#, r#"["x","y"]"#, r#""x""#, "null"] {
        let response = handler(&db, request("POST", "/notes", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "POST {body}");
        assert_eq!(
            body_json(&response),
            serde_json::json!({ "message": "invalid JSON body" })
        );

        let response = handler(&db, note_request("PUT", "abc", Some(body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "PUT {body}");
    }
}

#[tokio::test]
async fn list_notes_wraps_items() {
    let mut db = NotesTable::default();
    db.expect_list_notes()
        .times(1)
        .returning(|| Ok(vec![note("b", "second"), note("a", "first")]));

    let response = handler(&db, request("GET", "/notes", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(&response);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["noteId"], "b");
}

#[tokio::test]
async fn list_notes_empty() {
    let mut db = NotesTable::default();
    db.expect_list_notes().returning(|| Ok(vec![]));

    let response = handler(&db, request("GET", "/notes", None)).await.unwrap();

    assert_eq!(body_json(&response), serde_json::json!({ "items": [] }));
}

#[tokio::test]
async fn get_note_found_and_missing() {
    let mut db = NotesTable::default();
    db.expect_get_note()
        .with(eq("abc"))
        .returning(|id| Ok(note(id, "title")));
    db.expect_get_note()
        .with(eq("missing"))
        .returning(|_| Err(NoteStoreError::NotFound));

    let response = handler(&db, note_request("GET", "abc", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(&response)["SK"], "NOTE#abc");

    let response = handler(&db, note_request("GET", "missing", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(&response),
        serde_json::json!({ "message": "Not found" })
    );
}

#[tokio::test]
async fn update_note_only_sends_provided_fields() {
    let mut db = NotesTable::default();
    db.expect_update_note()
        .withf(|id, update| {
            id == "abc" && update.title.as_deref() == Some("renamed") && update.content.is_none()
        })
        .times(1)
        .returning(|id, update| {
            let mut stored = note(id, "old");
            stored.title = update.title.clone().unwrap_or_default();
            stored.updated_at = update.updated_at.clone();
            Ok(stored)
        });

    let response = handler(
        &db,
        note_request("PUT", "abc", Some(r#"{"title":" renamed "}"#)),
    )
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(&response);
    assert_eq!(body["title"], "renamed");
    assert_eq!(body["content"], "content");
}

#[tokio::test]
async fn update_missing_note_is_not_found() {
    let mut db = NotesTable::default();
    db.expect_update_note()
        .returning(|_, _| Err(NoteStoreError::NotFound));

    let response = handler(&db, note_request("PUT", "gone", Some("{}")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_note_returns_empty_204() {
    let mut db = NotesTable::default();
    db.expect_delete_note()
        .with(eq("abc"))
        .times(1)
        .returning(|_| Ok(()));

    let response = handler(&db, note_request("DELETE", "abc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_json_content_type(&response);
    assert!(response.body().is_empty());
}

#[tokio::test]
async fn delete_missing_note_is_not_found() {
    let mut db = NotesTable::default();
    db.expect_delete_note()
        .returning(|_| Err(NoteStoreError::NotFound));

    let response = handler(&db, note_request("DELETE", "gone", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn store_failures_are_internal_errors() {
    let mut db = NotesTable::default();
    db.expect_list_notes()
        .returning(|| Err(NoteStoreError::Other(anyhow::anyhow!("throttled"))));

    let response = handler(&db, request("GET", "/notes", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(&response),
        serde_json::json!({ "message": "Internal Server Error" })
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let db = NotesTable::default();

    let response = handler(&db, request("GET", "/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(&response),
        serde_json::json!({ "message": "Route not found" })
    );
}
