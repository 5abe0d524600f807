use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::customer::{
    hashing::{Argon2PasswordEncoder, PasswordEncoder},
    repo::seaorm::SeaOrmCustomerRepository,
    repository::{memory::InMemoryCustomerRepository, CustomerRepository},
    CustomerService,
};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Select the customer repository named by `storage.backend`.
async fn build_repository(cfg: &AppConfig) -> anyhow::Result<Arc<dyn CustomerRepository>> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            info!(backend = "memory", "customer repository ready");
            Ok(Arc::new(InMemoryCustomerRepository::new()))
        }
        StorageBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            migration::Migrator::up(&db, None).await?;
            info!(backend = "postgres", "customer repository ready, migrations applied");
            Ok(Arc::new(SeaOrmCustomerRepository::new(db)))
        }
    }
}

/// Composition root: repository + password encoder -> service -> handler state
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let repo = build_repository(cfg).await?;
    let encoder: Arc<dyn PasswordEncoder> = Arc::new(Argon2PasswordEncoder::new());
    Ok(AppState::new(CustomerService::new(repo, encoder)))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Build the app from an already loaded config and serve it.
/// The caller owns `.env` loading and logging setup.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting customer server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
