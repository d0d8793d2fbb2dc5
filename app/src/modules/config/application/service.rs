// Config Service
//
// 配置的读取与更新都经过规范化和校验，写入仓储的总是有效配置

use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::config::domain::{AppConfig, PartialAppConfig};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 一次配置变更的结果
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigUpdate {
    pub config: AppConfig,
    /// 助手服务地址或超时发生变化，需要重启才能生效
    pub restart_required: bool,
}

/// 配置服务
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }

    /// 读取配置
    ///
    /// 手工编辑的配置文件同样要规范化并通过校验
    pub async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        let mut config = self.repository.load().await?;
        config.normalize();
        check(&config)?;
        Ok(config)
    }

    /// 合并部分更新，校验失败时不写入
    pub async fn update(&self, partial: PartialAppConfig) -> Result<ConfigUpdate, ConfigError> {
        let current = self.get_all().await?;
        let mut config = current.clone();
        config.merge(partial);
        check(&config)?;

        self.repository.save(&config).await?;
        info!("[ConfigService] Configuration saved");

        Ok(changed(&current, config))
    }

    /// 删除已保存的配置，恢复默认值
    pub async fn reset(&self) -> Result<ConfigUpdate, ConfigError> {
        let current = self.get_all().await?;
        self.repository.clear().await?;
        let config = self.get_all().await?;
        info!("[ConfigService] Configuration reset to defaults");

        Ok(changed(&current, config))
    }
}

fn check(config: &AppConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|errors| {
        warn!("[ConfigService] Invalid configuration: {:?}", errors);
        ConfigError::ValidationError { errors }
    })
}

fn changed(previous: &AppConfig, config: AppConfig) -> ConfigUpdate {
    let restart_required = previous.service != config.service;
    if restart_required {
        warn!(
            "[ConfigService] Assistant service changed to {}, restart to apply",
            config.service.base_url.as_str()
        );
    }
    ConfigUpdate {
        config,
        restart_required,
    }
}
