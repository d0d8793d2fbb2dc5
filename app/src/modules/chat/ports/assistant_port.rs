use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 助手服务错误类型
///
/// 在界面层这三类失败会被合并为同一个结果：不追加消息，停止输入指示器
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {status} - {message}")]
    ServiceError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// `POST /chat` 请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_input: String,
    pub user: String,
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
}

/// `POST /chat` 响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// 助手服务端口
///
/// 远端法律助手被视为不透明的协作者：一个请求对应一个回复
#[async_trait]
pub trait AssistantPort: Send + Sync {
    /// 服务名称（用于日志）
    fn name(&self) -> &str;

    /// 发送一条用户消息并等待回复
    async fn reply(&self, request: ChatRequest) -> Result<ChatReply, AssistantError>;
}
