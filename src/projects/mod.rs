use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

pub use repo_types::Project;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::project_routes())
}
