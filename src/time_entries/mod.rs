use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

pub use repo_types::TimeEntry;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::time_entry_routes())
}
