//! Draft handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Draft routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", put(handler::save_draft))
        .route("/", get(handler::get_draft))
        .route("/resume", get(handler::resume))
}
