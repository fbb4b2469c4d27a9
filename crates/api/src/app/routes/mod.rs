use axum::Router;

pub mod system;
pub mod vendors;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/vendors", vendors::router())
}
