// Config Commands
//
// 读写配置文件并刷新当前生效的配置。
// 助手服务的地址和超时在启动时绑定到 HTTP 客户端，修改后需重启。

use tracing::{info, warn};

use crate::infrastructure::AppState;
use crate::modules::config::{AppConfig, ConfigUpdate, PartialAppConfig};
use crate::shared::AppResult;

pub async fn config_get_all(state: &AppState) -> AppResult<AppConfig> {
    Ok(state.config_module.get_all().await?)
}

pub async fn config_update(state: &AppState, partial: PartialAppConfig) -> AppResult<ConfigUpdate> {
    let update = state.config_module.update(partial).await?;
    apply(state, &update).await;
    info!("[Config] Configuration updated");
    Ok(update)
}

pub async fn config_reset(state: &AppState) -> AppResult<ConfigUpdate> {
    let update = state.config_module.reset().await?;
    apply(state, &update).await;
    info!("[Config] Configuration reset to defaults");
    Ok(update)
}

/// 聊天默认值和介绍页设置立即生效，服务连接保持启动时的设置
async fn apply(state: &AppState, update: &ConfigUpdate) {
    let mut live = state.config.write().await;
    let service = live.service.clone();
    *live = update.config.clone();

    if update.restart_required {
        warn!("[Config] Assistant service settings apply after restart");
        live.service = service;
    }
}
