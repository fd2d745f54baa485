use actix_web::{web, HttpServer};
use log::{info, warn};

use ge_api::{create_app, AppState};
use ge_infra::database::DatabasePool;
use ge_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting GathEvent API ({})", config.environment);

    let mut state = AppState::new(config.clone());
    if config.database.is_configured() {
        let pool = DatabasePool::connect_lazy(&config.database)?;
        info!("Database pool configured ({} max connections)", config.database.max_connections);
        state = state.with_database(pool);
    } else {
        warn!("DATABASE_URL not set; readiness will report the database as disabled");
    }

    let state = web::Data::new(state);
    let bind_address = config.server.bind_address();
    info!("Server listening on http://{}", bind_address);

    let app_state = state.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    if let Some(pool) = &state.database {
        pool.close().await;
    }
    info!("Server stopped");

    Ok(())
}
