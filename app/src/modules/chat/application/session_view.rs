// Chat Session View - 聊天界面状态容器
//
// 持有对话状态，接收输入，转发给助手服务并追加回复。
// 状态变化通过 ChatEventPublisher 通知订阅者。

use serde::Serialize;
use std::sync::{Arc, Weak};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{CommandHandler, SubmitMessageCommand, SubmitMessageHandler};
use crate::modules::chat::domain::{
    ChatViewEvent, Conversation, ConversationId, Message, SessionContext,
};
use crate::modules::chat::ports::ChatEventPublisher;

/// 聊天界面快照（供前端渲染）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshot {
    pub context: SessionContext,
    pub messages: Vec<Message>,
    pub input: String,
    pub is_typing: bool,
}

/// 一次提交的最终结果
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyOutcome {
    /// 回复已追加
    Resolved(Message),
    /// 请求失败，未追加任何消息
    Failed,
    /// 回复到达时界面已关闭
    Detached,
}

/// 等待中的回复
///
/// 丢弃句柄不会取消请求
#[derive(Debug)]
pub struct PendingReply {
    handle: JoinHandle<ReplyOutcome>,
}

impl PendingReply {
    /// 等待请求结束
    pub async fn outcome(self) -> ReplyOutcome {
        self.handle.await.unwrap_or(ReplyOutcome::Detached)
    }
}

/// 聊天界面
///
/// 每个实例对应一个会话上下文，上下文在生命周期内不变
pub struct ChatSessionView {
    context: SessionContext,
    conversation: Arc<RwLock<Conversation>>,
    submit_handler: Arc<SubmitMessageHandler>,
    publisher: Arc<dyn ChatEventPublisher>,
}

impl ChatSessionView {
    /// 打开聊天界面，以问候语初始化消息序列（不发起网络请求）
    pub fn open(
        context: SessionContext,
        initial_message: impl Into<String>,
        submit_handler: Arc<SubmitMessageHandler>,
        publisher: Arc<dyn ChatEventPublisher>,
    ) -> Self {
        let conversation = Conversation::open(context.clone(), initial_message);
        let greeting = conversation.messages()[0].clone();

        info!(
            "[ChatSessionView] Opened conversation {} ({}) for {}",
            context.conversation_id(),
            context.conversation_name(),
            context.user()
        );

        let view = Self {
            context,
            conversation: Arc::new(RwLock::new(conversation)),
            submit_handler,
            publisher,
        };
        view.publish_appended(0, greeting);
        view
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn conversation_id(&self) -> &ConversationId {
        self.context.conversation_id()
    }

    pub async fn messages(&self) -> Vec<Message> {
        self.conversation.read().await.messages().to_vec()
    }

    pub async fn is_typing(&self) -> bool {
        self.conversation.read().await.is_typing()
    }

    pub async fn input(&self) -> String {
        self.conversation.read().await.input().to_string()
    }

    /// 更新输入缓冲区
    pub async fn set_input(&self, text: impl Into<String>) {
        self.conversation.write().await.set_input(text);
    }

    pub async fn snapshot(&self) -> ChatSnapshot {
        let conversation = self.conversation.read().await;
        ChatSnapshot {
            context: self.context.clone(),
            messages: conversation.messages().to_vec(),
            input: conversation.input().to_string(),
            is_typing: conversation.is_typing(),
        }
    }

    /// 发送输入缓冲区中的内容
    pub async fn send(&self) -> Option<PendingReply> {
        let text = self.input().await;
        self.submit(&text).await
    }

    /// 提交用户消息
    ///
    /// 空白文本不做任何处理并返回 `None`。否则立即追加用户消息、清空输入缓冲区、
    /// 打开输入指示器，然后在后台发起一次请求。
    pub async fn submit(&self, text: &str) -> Option<PendingReply> {
        {
            // 持有写锁期间发布，保证事件顺序与状态变化一致
            let mut conversation = self.conversation.write().await;
            let was_typing = conversation.is_typing();
            let message = conversation.submit(text)?.clone();
            let index = conversation.len() - 1;

            debug!(
                "[ChatSessionView] Appended user message #{} to {}",
                index,
                self.conversation_id()
            );
            self.publish_appended(index, message);
            if !was_typing {
                self.publish_typing(true);
            }
        }

        let command = SubmitMessageCommand::new(&self.context, text);
        let handler = self.submit_handler.clone();
        let conversation = Arc::downgrade(&self.conversation);
        let publisher = self.publisher.clone();
        let conversation_id = self.conversation_id().clone();

        let handle = tokio::spawn(async move {
            let result = handler.handle(command).await;
            settle_reply(conversation, publisher, conversation_id, result).await
        });

        Some(PendingReply { handle })
    }

    /// 键盘弹出
    pub fn notify_keyboard_shown(&self) {
        self.publish_scroll_to_end();
    }

    /// 输入框获得焦点
    pub fn notify_input_focused(&self) {
        self.publish_scroll_to_end();
    }

    fn publish_appended(&self, index: usize, message: Message) {
        publish_appended(
            self.publisher.as_ref(),
            self.conversation_id(),
            index,
            message,
        );
    }

    fn publish_typing(&self, is_typing: bool) {
        self.publisher.publish(ChatViewEvent::TypingChanged {
            conversation_id: self.conversation_id().clone(),
            is_typing,
        });
    }

    fn publish_scroll_to_end(&self) {
        self.publisher.publish(ChatViewEvent::ScrollToEnd {
            conversation_id: self.conversation_id().clone(),
        });
    }
}

/// 追加后总是滚动到底部
fn publish_appended(
    publisher: &dyn ChatEventPublisher,
    conversation_id: &ConversationId,
    index: usize,
    message: Message,
) {
    publisher.publish(ChatViewEvent::MessageAppended {
        conversation_id: conversation_id.clone(),
        index,
        message,
    });
    publisher.publish(ChatViewEvent::ScrollToEnd {
        conversation_id: conversation_id.clone(),
    });
}

/// 把请求结果写回对话
async fn settle_reply(
    conversation: Weak<RwLock<Conversation>>,
    publisher: Arc<dyn ChatEventPublisher>,
    conversation_id: ConversationId,
    result: Result<super::SubmitMessageResponse, super::ApplicationError>,
) -> ReplyOutcome {
    let Some(conversation) = conversation.upgrade() else {
        debug!(
            "[ChatSessionView] Reply for {} arrived after the view closed",
            conversation_id
        );
        return ReplyOutcome::Detached;
    };

    let mut conversation = conversation.write().await;
    match result {
        Ok(response) => {
            let message = conversation.resolve_reply(response.reply).clone();
            let index = conversation.len() - 1;

            publish_appended(publisher.as_ref(), &conversation_id, index, message.clone());
            if !conversation.is_typing() {
                publisher.publish(ChatViewEvent::TypingChanged {
                    conversation_id,
                    is_typing: false,
                });
            }
            ReplyOutcome::Resolved(message)
        }
        Err(e) => {
            conversation.fail_reply();

            warn!(
                "[ChatSessionView] Reply for {} failed: {}",
                conversation_id, e
            );
            publisher.publish(ChatViewEvent::ReplyFailed {
                conversation_id: conversation_id.clone(),
                reason: e.to_string(),
            });
            if !conversation.is_typing() {
                publisher.publish(ChatViewEvent::TypingChanged {
                    conversation_id,
                    is_typing: false,
                });
            }
            ReplyOutcome::Failed
        }
    }
}
