//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod drafts;
pub mod health;
pub mod submissions;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/submissions", submissions::routes())
        .nest("/drafts", drafts::routes())
}
