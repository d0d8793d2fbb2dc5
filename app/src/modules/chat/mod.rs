// Chat Module - 聊天模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象和领域事件
// - ports: 端口层，定义助手服务与事件发布的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，命令处理器与聊天界面状态容器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError, ChatSessionView, ChatSnapshot, CommandHandler, PendingReply, ReplyOutcome,
    SubmitMessageCommand, SubmitMessageHandler, SubmitMessageResponse,
};

pub use domain::{
    ChatViewEvent, Conversation, ConversationId, Emotion, Message, MessageId, Sender,
    SessionContext, UserId,
};

pub use infrastructure::{HttpAssistantAdapter, ScriptedAssistant, ScriptedReply};

pub use ports::{AssistantError, AssistantPort, ChatEventPublisher, ChatReply, ChatRequest};

use std::sync::Arc;

/// Chat 模块容器
///
/// 管理模块内的依赖注入
pub struct ChatModule {
    assistant: Arc<dyn AssistantPort>,
    publisher: Arc<dyn ChatEventPublisher>,
    submit_handler: Arc<SubmitMessageHandler>,
}

impl ChatModule {
    pub fn new(assistant: Arc<dyn AssistantPort>, publisher: Arc<dyn ChatEventPublisher>) -> Self {
        let submit_handler = Arc::new(SubmitMessageHandler::new(assistant.clone()));
        Self {
            assistant,
            publisher,
            submit_handler,
        }
    }

    /// 打开一个新的聊天界面
    pub fn open_view(
        &self,
        context: SessionContext,
        initial_message: impl Into<String>,
    ) -> ChatSessionView {
        ChatSessionView::open(
            context,
            initial_message,
            self.submit_handler.clone(),
            self.publisher.clone(),
        )
    }

    pub fn assistant(&self) -> &Arc<dyn AssistantPort> {
        &self.assistant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::EventBus;

    #[tokio::test]
    async fn test_chat_module_integration() {
        let assistant = Arc::new(ScriptedAssistant::new(vec![ScriptedReply::Text(
            "La patria potestad es el conjunto de derechos y deberes de los padres.".to_string(),
        )]));
        let module = ChatModule::new(assistant.clone(), Arc::new(EventBus::new()));
        assert_eq!(module.assistant().name(), "scripted");

        let context = SessionContext::new(Emotion::Neutral, "ana", "12345", "Chat inicial");
        let view = module.open_view(context, "Hola soy Nova, espero serte de mucha ayuda");

        let pending = view.submit("¿Qué es la patria potestad?").await.unwrap();
        let outcome = pending.outcome().await;
        assert!(matches!(outcome, ReplyOutcome::Resolved(_)));

        let messages = view.messages().await;
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender(), Sender::User);
        assert_eq!(messages[2].sender(), Sender::Assistant);

        let received = assistant.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].user_input, "¿Qué es la patria potestad?");
        assert_eq!(received[0].user, "ana");
        assert_eq!(received[0].conversation_id, "12345");
    }
}
