use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/grids", get(handlers::list_grids).post(handlers::create_grid))
        .route(
            "/api/grids/:id",
            get(handlers::get_grid)
                .patch(handlers::update_grid)
                .delete(handlers::delete_grid),
        )
        .route("/api/grids/:id/toggle", post(handlers::toggle_date))
        .route("/api/grids/:id/mark-today", post(handlers::mark_today))
        .with_state(state)
}
