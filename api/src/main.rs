use api::{build_router, AppState};
use menu_extractor::{Config, GeminiService, MenuService};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Loaded {:?}", config);

    let gemini_service = Arc::new(GeminiService::new(&config)?);
    let menu_service = MenuService::new(config.pdf_path.clone(), gemini_service);

    let app = build_router(AppState::new(menu_service));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
