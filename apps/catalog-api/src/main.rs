//! Catalog API - REST server and server-rendered product pages

use axum_helpers::server::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;
mod web;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // Connect to PostgreSQL
    let db = database::postgres::connect_from_config(&config.database).await?;

    let state = AppState { config, db };

    // JSON API under /api, with Swagger UI and the common middleware stack
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Server-rendered pages live at the root, outside /api
    let app = router.merge(web::router(&state)?);

    info!(
        "Starting Catalog API on port {}",
        state.config.server.port
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
