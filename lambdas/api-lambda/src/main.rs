use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;
use users_shared::config::Config;
use users_shared::AppState;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_http::tracing::init_default_subscriber();

    // Table client is built once and reused across invocations
    let config = Config::from_env();
    tracing::info!(
        "Users API starting - table: {} write mode: {:?} backend: {:?}",
        config.table_name,
        config.write_mode,
        config.backend
    );
    let state = AppState::from_config(&config).await;

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
