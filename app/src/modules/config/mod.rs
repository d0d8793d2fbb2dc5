// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体和值对象
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器
// - application: 应用层，读取、合并、校验配置

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    AppConfig, BaseUrl, ChatDefaults, IntroductionConfig, LogLevel, LoggingConfig,
    PartialAppConfig, PartialChatDefaults, PartialIntroductionConfig, PartialLoggingConfig,
    PartialServiceConfig, ServiceConfig,
};

// Ports
pub use ports::{ConfigError, ConfigRepository};

// Infrastructure
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository};

// Application
pub use application::{ConfigService, ConfigUpdate};

use std::path::PathBuf;
use std::sync::Arc;

/// 覆盖数据目录的环境变量
pub const DATA_DIR_ENV: &str = "LEXEDU_DATA_DIR";

/// 解析应用数据目录
///
/// `LEXEDU_DATA_DIR` 优先，否则为系统数据目录下的 `lexedu`
pub fn resolve_data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::data_dir()
        .map(|dir| dir.join("lexedu"))
        .ok_or(ConfigError::NoDataDir)
}

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    service: ConfigService,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryConfigRepository::new()))
    }

    /// 使用文件存储创建
    pub fn new_with_file(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_repository(Arc::new(FileConfigRepository::new(data_dir.into())))
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 获取配置服务
    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// 获取全部配置
    pub async fn get_all(&self) -> Result<AppConfig, ConfigError> {
        self.service.get_all().await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialAppConfig) -> Result<ConfigUpdate, ConfigError> {
        self.service.update(partial).await
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<ConfigUpdate, ConfigError> {
        self.service.reset().await
    }
}
