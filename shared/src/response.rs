use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::types::ErrorBody;

/// JSON response with the CORS header every endpoint carries
pub fn api_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    let resp = Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?;
    Ok(resp)
}

pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
) -> Result<Response<Body>, Error> {
    api_response(status, &ErrorBody::new(message))
}
