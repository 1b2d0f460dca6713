use crate::api::{self, AppState};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Handle the `serve` command: start the HTTP service and block until it stops.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
        tracing_subscriber::fmt().with_env_filter(filter).init();

        let host = host.clone().unwrap_or_else(|| cfg.host.clone());
        let port = port.unwrap_or(cfg.port);
        let state = AppState::new(cfg.store());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::Server(e.to_string()))?;

        runtime.block_on(api::serve(state, &host, port))?;
    }

    Ok(())
}
