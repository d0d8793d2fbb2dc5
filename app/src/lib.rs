pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use infrastructure::AppState;
use modules::config::{resolve_data_dir, LoggingConfig};
use modules::ConfigModule;
use shared::AppResult;

/// 初始化日志，`RUST_LOG` 优先于配置文件
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run() -> AppResult<()> {
    let data_dir = resolve_data_dir()?;
    let config_module = ConfigModule::new_with_file(&data_dir);
    let config = config_module.get_all().await?;

    init_tracing(&config.logging);
    tracing::info!("LexEdu starting...");
    tracing::info!("App data directory: {:?}", data_dir);

    let state = Arc::new(AppState::connect(config_module, config)?);
    commands::shell::run(state).await
}
