use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::chat::domain::{ConversationId, SessionContext, UserId};
use crate::modules::chat::ports::{AssistantPort, ChatRequest};

/// 提交消息命令
#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    /// 用户输入（原样发送，不裁剪）
    pub text: String,
    pub user: UserId,
    pub conversation_id: ConversationId,
}

impl SubmitMessageCommand {
    pub fn new(context: &SessionContext, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: context.user().clone(),
            conversation_id: context.conversation_id().clone(),
        }
    }
}

/// 提交消息响应
#[derive(Debug, Clone)]
pub struct SubmitMessageResponse {
    /// 助手回复文本
    pub reply: String,
}

/// 提交消息命令处理器
///
/// 每条命令对应一次 `POST /chat`，不重试
pub struct SubmitMessageHandler {
    assistant: Arc<dyn AssistantPort>,
}

impl SubmitMessageHandler {
    pub fn new(assistant: Arc<dyn AssistantPort>) -> Self {
        Self { assistant }
    }
}

#[async_trait]
impl CommandHandler<SubmitMessageCommand, SubmitMessageResponse> for SubmitMessageHandler {
    async fn handle(
        &self,
        command: SubmitMessageCommand,
    ) -> Result<SubmitMessageResponse, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::ValidationError(
                "Message content cannot be empty".to_string(),
            ));
        }

        debug!(
            "[SubmitMessageHandler] Relaying message to {} (conversation {})",
            self.assistant.name(),
            command.conversation_id
        );

        let request = ChatRequest {
            user_input: command.text,
            user: command.user.to_string(),
            conversation_id: command.conversation_id.to_string(),
        };
        let reply = self.assistant.reply(request).await?;

        Ok(SubmitMessageResponse {
            reply: reply.response,
        })
    }
}
