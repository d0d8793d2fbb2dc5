// In-Memory Config Repository
//
// 在内存中保存 config.json 的文本内容，序列化格式与文件仓储一致

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储
#[derive(Default)]
pub struct InMemoryConfigRepository {
    document: RwLock<Option<String>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以已有的配置文本初始化，相当于用户手工编辑过的 config.json
    pub fn from_json(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
        }
    }

    /// 当前保存的文本
    pub async fn document(&self) -> Option<String> {
        self.document.read().await.clone()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match self.document.read().await.as_deref() {
            Some(document) => Ok(serde_json::from_str(document)?),
            None => Ok(AppConfig::default()),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let document = serde_json::to_string_pretty(config)?;
        *self.document.write().await = Some(document);
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        *self.document.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.document.read().await.is_some())
    }
}
