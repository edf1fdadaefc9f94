use lambda_http::{
    Body, Response,
    http::{StatusCode, header::CONTENT_TYPE},
};
use serde::Serialize;

use crate::model::ErrorMessage;

const APPLICATION_JSON: &str = "application/json";

/// Proxy integration response carrying a JSON body
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> anyhow::Result<Response<Body>> {
    let body = serde_json::to_string(body)?;

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(Body::Text(body))?)
}

/// `{"message": ...}` with the given status
pub fn message(status: StatusCode, message: &str) -> anyhow::Result<Response<Body>> {
    json(status, &ErrorMessage { message })
}

pub fn bad_request(msg: &str) -> anyhow::Result<Response<Body>> {
    message(StatusCode::BAD_REQUEST, msg)
}

pub fn not_found() -> anyhow::Result<Response<Body>> {
    message(StatusCode::NOT_FOUND, "Not found")
}

pub fn route_not_found() -> anyhow::Result<Response<Body>> {
    message(StatusCode::NOT_FOUND, "Route not found")
}

pub fn internal_server_error() -> anyhow::Result<Response<Body>> {
    message(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// 204 keeps the json content type but carries no body
pub fn no_content() -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header(CONTENT_TYPE, APPLICATION_JSON)
        .body(Body::Empty)?)
}
