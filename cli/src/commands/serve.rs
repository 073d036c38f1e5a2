use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use uuid::Uuid;

use robotrun_core::api::{AppConfig, CliError};

use crate::commands::cli::ServeArgs;
use crate::http::{server, AppState};

pub async fn handle_serve(args: ServeArgs, cfg: &AppConfig) -> Result<(), CliError> {
    let session_id = args
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut server_cfg = cfg.http_server.clone();
    if let Some(host) = args.host {
        server_cfg.host = host;
    }
    if let Some(port) = args.port {
        server_cfg.port = port;
    }

    let runner = robotrun_plugins::factory::build_runner(cfg).map_err(|e| CliError::Command(e.to_string()))?;
    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState::new(
        session_id.clone(),
        runner,
        Arc::new(cfg.robot.paths().report),
        Duration::from_secs(server_cfg.request_timeout_secs),
        shutdown_tx,
    );

    tracing::info!(
        session_id = %session_id,
        host = %server_cfg.host,
        port = server_cfg.port,
        "starting robotrun service"
    );

    server::start_server(server_cfg, state)
        .await
        .map_err(|e| CliError::Command(e.to_string()))
}
