pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub use state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/menu", get(routes::get_menu))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}
