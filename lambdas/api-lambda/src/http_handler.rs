use lambda_http::{http::Method, Body, Error, Request, RequestExt, Response};
use std::sync::Arc;
use users_shared::{handlers, AppState};

/// Main Lambda handler - routes requests on the HTTP method alone
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("Users Lambda invoked - Method: {} Path: {}", method, path);

    let email = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("email"));

    match method {
        &Method::GET => handlers::get_user(&state, email).await,
        &Method::POST => handlers::create_user(&state, body).await,
        &Method::PUT => handlers::update_user(&state, body).await,
        &Method::DELETE => handlers::delete_user(&state, email).await,
        _ => handlers::unhandled_method(),
    }
}
