use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use super::{EventBus, HttpError, ServiceClient};
use crate::modules::account::{AccountPort, HttpAccountAdapter};
use crate::modules::chat::{AssistantPort, ChatSessionView, HttpAssistantAdapter};
use crate::modules::config::AppConfig;
use crate::modules::{AccountModule, ChatModule, ConfigModule, Navigator};

/// 应用全局状态
///
/// 同一时刻最多只有一个打开的聊天界面
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub config_module: ConfigModule,
    /// 当前生效的配置（服务地址的修改在重启后生效）
    pub config: RwLock<AppConfig>,
    pub chat: ChatModule,
    pub account: AccountModule,
    pub navigator: RwLock<Navigator>,
    pub active_chat: RwLock<Option<ChatSessionView>>,
}

impl AppState {
    pub fn new(
        config_module: ConfigModule,
        config: AppConfig,
        assistant: Arc<dyn AssistantPort>,
        account: Arc<dyn AccountPort>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        Self {
            chat: ChatModule::new(assistant, event_bus.clone()),
            account: AccountModule::new(account),
            event_bus,
            config_module,
            config: RwLock::new(config),
            navigator: RwLock::new(Navigator::new()),
            active_chat: RwLock::new(None),
        }
    }

    /// 使用 HTTP 适配器连接配置中的服务
    pub fn connect(config_module: ConfigModule, config: AppConfig) -> Result<Self, HttpError> {
        let client = ServiceClient::new(
            config.service.base_url.as_str(),
            config.service.timeout_secs,
        )?;
        info!("[AppState] Using service at {}", client.base_url());

        let assistant = Arc::new(HttpAssistantAdapter::new(client.clone()));
        let account = Arc::new(HttpAccountAdapter::new(client));

        Ok(Self::new(config_module, config, assistant, account))
    }
}
