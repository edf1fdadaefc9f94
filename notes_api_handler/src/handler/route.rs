use lambda_http::{Request, RequestExt, http::Method};

const NOTES_PATH: &str = "/notes";

/// The endpoints served by the notes lambda
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    CreateNote,
    ListNotes,
    GetNote(String),
    UpdateNote(String),
    DeleteNote(String),
    NotFound,
}

impl Route {
    /// Resolves the route from the method and path.
    /// The note id comes from the `noteId` path parameter, falling back to the path itself
    /// when the integration did not provide parameters.
    pub fn from_request(request: &Request) -> Self {
        let path = request.uri().path();

        if path == NOTES_PATH {
            return match *request.method() {
                Method::POST => Route::CreateNote,
                Method::GET => Route::ListNotes,
                _ => Route::NotFound,
            };
        }

        let Some(note_id) = note_id(request) else {
            return Route::NotFound;
        };

        match *request.method() {
            Method::GET => Route::GetNote(note_id),
            Method::PUT => Route::UpdateNote(note_id),
            Method::DELETE => Route::DeleteNote(note_id),
            _ => Route::NotFound,
        }
    }
}

fn note_id(request: &Request) -> Option<String> {
    let params = request.path_parameters();
    if let Some(id) = params.first("noteId")
        && !id.is_empty()
    {
        return Some(id.to_string());
    }

    request
        .uri()
        .path()
        .strip_prefix(NOTES_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|id| !id.is_empty() && !id.contains('/'))
        .map(str::to_string)
}
