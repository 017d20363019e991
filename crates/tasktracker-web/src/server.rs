//! Server setup with Tower middleware

use axum::Router;
use http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;

use crate::Error;
use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Run the axum server until ctrl-c.
///
/// # Errors
///
/// Returns an error if the CORS origin is not a valid header value or the
/// address cannot be bound.
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<(), Error> {
    let app = create_app(config, state)?;

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!(
        address = %config.bind_address,
        static_dir = %config.static_dir.display(),
        "TaskTracker listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("TaskTracker stopped");
    Ok(())
}

/// Create the application: the JSON API under `/api` and the compiled UI for
/// every other path.
///
/// Unknown non-API paths fall back to `index.html` so client-side routes load.
///
/// # Errors
///
/// Returns [`Error::InvalidHeader`] if `cors_origin` is neither `*` nor a
/// valid origin.
pub fn create_app(config: &ServerConfig, state: AppState) -> Result<Router, Error> {
    let index = config.static_dir.join("index.html");
    let static_files = ServeDir::new(&config.static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    let router = Router::new()
        .nest("/api", routes::create_router().with_state(state))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&config.cors_origin)?),
        );

    Ok(router)
}

fn cors_layer(origin: &str) -> Result<CorsLayer, Error> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(origin.parse::<HeaderValue>()?)
    };
    info!(origin, "Configured CORS");

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
