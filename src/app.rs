use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/day/previous", post(handlers::previous_day))
        .route("/day/next", post(handlers::next_day))
        .route("/tasks/:date/:id/toggle", post(handlers::toggle))
        .route("/api/day", get(handlers::get_day).post(handlers::select_day))
        .route("/api/day/previous", post(handlers::api_previous_day))
        .route("/api/day/next", post(handlers::api_next_day))
        .route("/api/tasks/:date", get(handlers::get_tasks))
        .route("/api/tasks/:date/:id/toggle", post(handlers::api_toggle))
        .with_state(state)
}
