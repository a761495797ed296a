//! cafe HTTP surface — axum router and server lifecycle.
//!
//! [`router`] mounts the single `GET /cafe` endpoint over a shared
//! [`AppState`]; [`server::run`] binds the configured address, loads the
//! catalog and serves until Ctrl-C or SIGTERM.

pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{run, serve};

use axum::{routing::get, Router};
use cafe_core::Catalog;
use std::sync::Arc;

/// State shared by every request. Cloning is cheap; the catalog itself is
/// never copied or mutated.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cafe", get(handlers::list_cafes))
        .with_state(state)
}
