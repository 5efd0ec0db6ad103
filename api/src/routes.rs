use crate::state::AppState;
use axum::{extract::State, Json};
use menu_extractor::MenuResponse;

/// `GET /menu`. Always answers 200; any failure degrades to the empty menu.
pub async fn get_menu(State(state): State<AppState>) -> Json<MenuResponse> {
    match state.menu_service.todays_menu().await {
        Ok(menu) => {
            log::info!("Serving menu for {:?}", menu.date);
            Json(menu)
        }
        Err(e) => {
            log::warn!("Returning empty menu ({}): {}", e.kind(), e);
            Json(MenuResponse::default())
        }
    }
}
