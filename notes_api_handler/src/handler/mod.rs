mod notes;
mod route;

#[cfg(test)]
mod tests;

pub use route::Route;

use lambda_http::{Body, Error, Request, Response};

use crate::{response, service::db::NotesTable};

/// Entry point for every API Gateway request.
/// Unexpected failures are logged and surfaced as a bare 500 so internals never leak to clients.
#[tracing::instrument(skip_all, fields(method = %request.method(), path = %request.uri().path()))]
pub async fn handler(db: &NotesTable, request: Request) -> Result<Response<Body>, Error> {
    let route = Route::from_request(&request);
    tracing::trace!(route = ?route, "resolved route");

    match dispatch(db, &request, route).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!(error = ?e, "unhandled error");
            Ok(response::internal_server_error()?)
        }
    }
}

async fn dispatch(
    db: &NotesTable,
    request: &Request,
    route: Route,
) -> anyhow::Result<Response<Body>> {
    match route {
        Route::CreateNote => notes::create_note(db, request).await,
        Route::ListNotes => notes::list_notes(db).await,
        Route::GetNote(note_id) => notes::get_note(db, &note_id).await,
        Route::UpdateNote(note_id) => notes::update_note(db, request, &note_id).await,
        Route::DeleteNote(note_id) => notes::delete_note(db, &note_id).await,
        Route::NotFound => response::route_not_found(),
    }
}
