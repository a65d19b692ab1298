//! Per-method handlers: one user operation each, wrapped in the response envelope.
//!
//! Reads answer `302 Found` and a DELETE without an email answers
//! `502 Bad Gateway`; existing clients depend on both codes.

use lambda_http::{http::StatusCode, Body, Error, Response};

use crate::response::{api_response, error_response};
use crate::validators::is_email_valid;
use crate::{users, AppState};

pub const NO_EMAIL_PROVIDED: &str = "No email provided";
pub const METHOD_NOT_ALLOWED: &str = "This method is not allowed";

/// GET: one user when `email` is given, otherwise the whole table
pub async fn get_user(state: &AppState, email: Option<&str>) -> Result<Response<Body>, Error> {
    match email {
        Some(email) => {
            if let Some(resp) = reject_invalid_email(email)? {
                return Ok(resp);
            }
            match users::fetch_user(state.table(), email).await {
                Ok(user) => api_response(StatusCode::FOUND, &user),
                Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
            }
        }
        None => match users::fetch_all_users(state.table()).await {
            Ok(all) => api_response(StatusCode::FOUND, &all),
            Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        },
    }
}

/// POST
pub async fn create_user(state: &AppState, body: &[u8]) -> Result<Response<Body>, Error> {
    match users::create_user(state.table(), state.write_mode(), body).await {
        Ok(user) => api_response(StatusCode::CREATED, &user),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// PUT
pub async fn update_user(state: &AppState, body: &[u8]) -> Result<Response<Body>, Error> {
    match users::update_user(state.table(), state.write_mode(), body).await {
        Ok(user) => api_response(StatusCode::OK, &user),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// DELETE: `email` is required
pub async fn delete_user(state: &AppState, email: Option<&str>) -> Result<Response<Body>, Error> {
    let Some(email) = email else {
        return error_response(StatusCode::BAD_GATEWAY, NO_EMAIL_PROVIDED);
    };
    if let Some(resp) = reject_invalid_email(email)? {
        return Ok(resp);
    }

    match users::delete_user(state.table(), state.write_mode(), email).await {
        Ok(confirmation) => api_response(StatusCode::OK, confirmation),
        Err(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

pub fn unhandled_method() -> Result<Response<Body>, Error> {
    api_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
}

/// A malformed email on the query string ends the request with a 400
fn reject_invalid_email(email: &str) -> Result<Option<Response<Body>>, Error> {
    if is_email_valid(email) {
        return Ok(None);
    }
    tracing::warn!("Rejected invalid email in query string: {:?}", email);
    error_response(
        StatusCode::BAD_REQUEST,
        crate::errors::UserError::InvalidEmail.to_string(),
    )
    .map(Some)
}
