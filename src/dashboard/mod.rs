use crate::state::AppState;
use axum::Router;

pub mod aggregate;
pub mod dto;
pub mod handlers;
mod services;
pub mod source;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::dashboard_routes())
}
