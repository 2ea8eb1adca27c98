use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

pub use repo_types::Developer;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::developer_routes())
}
