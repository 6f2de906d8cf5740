//! Server entry point: resolves config, wires storage into the controller
//! and serves the router.

use foundation_api::{router, AnomalyController, ServerConfig};
use foundation_core::db::{open_db, open_db_in_memory};
use foundation_core::{
    init_console_logging, init_logging, sample_catalog, seed_if_empty, AnomalyService,
    RepositoryAnomalyService, SqliteAnomalyRepository,
};
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("foundation: {err}");
            return ExitCode::FAILURE;
        }
    };

    let logging = match config.log_dir.as_deref() {
        Some(dir) => init_logging(config.log_level, dir),
        None => init_console_logging(config.log_level),
    };
    if let Err(err) = logging {
        eprintln!("foundation: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=main status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ServerConfig) -> Result<(), Box<dyn Error>> {
    let conn = match config.db_path.as_ref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = RepositoryAnomalyService::new(SqliteAnomalyRepository::new(conn));

    if config.seed_sample {
        seed_if_empty(service.repository(), &sample_catalog())?;
    }

    let service: Arc<dyn AnomalyService> = Arc::new(service);
    let app = router(AnomalyController::new(service));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(
        "event=server_start module=main status=ok version={} addr={}",
        env!("CARGO_PKG_VERSION"),
        config.addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
