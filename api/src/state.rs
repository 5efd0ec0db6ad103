use menu_extractor::MenuService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub menu_service: Arc<MenuService>,
}

impl AppState {
    pub fn new(menu_service: MenuService) -> Self {
        Self {
            menu_service: Arc::new(menu_service),
        }
    }
}
