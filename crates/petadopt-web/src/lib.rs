//! Pet adoption web surface
//!
//! Axum router exposing list, add, edit and delete pages for pets, adopters,
//! adoptions and payments.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod render;
pub mod request_id;
pub mod state;

use std::net::SocketAddr;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use petadopt_core::{Adopter, Adoption, Payment, Pet};
use petadopt_service::CrudService;
use petadopt_store::Record;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::render::Tabular;
use crate::state::AppState;

/// Routes for one record type
fn entity_routes<R: Record + Tabular>() -> Router<AppState> {
    let kind = R::KIND;
    Router::new()
        .route(kind.list_path(), get(handlers::list::<R>))
        .route(&format!("/add_{}", kind.slug()), post(handlers::create::<R>))
        .route(
            &format!("/edit_{}/:id", kind.slug()),
            get(handlers::edit_form::<R>).post(handlers::edit::<R>),
        )
        .route(
            &format!("/delete_{}/:id", kind.slug()),
            get(handlers::delete::<R>),
        )
}

/// Create the Axum application router with all routes and middleware
pub fn create_app(service: CrudService) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .merge(entity_routes::<Pet>())
        .merge(entity_routes::<Adopter>())
        .merge(entity_routes::<Adoption>())
        .merge(entity_routes::<Payment>())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id::request_id))
        .with_state(state)
}

/// Run the server on the specified address until Ctrl-C
///
/// # Errors
/// Fails when the address cannot be bound or the server stops abnormally.
pub async fn run_server(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Server listening on {}", addr);
    info!("- Records: http://{}/pets", addr);
    info!("- Health endpoint: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
