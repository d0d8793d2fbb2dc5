use serde::{Deserialize, Serialize};

use super::entities::Message;
use super::value_objects::ConversationId;

/// 聊天界面状态变化事件
///
/// 由 ChatSessionView 发布，前端订阅后重新渲染
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChatViewEvent {
    /// 消息被追加到序列末尾
    #[serde(rename_all = "camelCase")]
    MessageAppended {
        conversation_id: ConversationId,
        index: usize,
        message: Message,
    },
    /// 输入指示器状态变化
    #[serde(rename_all = "camelCase")]
    TypingChanged {
        conversation_id: ConversationId,
        is_typing: bool,
    },
    /// 请求滚动到列表底部
    #[serde(rename_all = "camelCase")]
    ScrollToEnd { conversation_id: ConversationId },
    /// 回复请求失败（不会追加任何消息）
    #[serde(rename_all = "camelCase")]
    ReplyFailed {
        conversation_id: ConversationId,
        reason: String,
    },
}

impl ChatViewEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ChatViewEvent::MessageAppended { .. } => "message.appended",
            ChatViewEvent::TypingChanged { .. } => "typing.changed",
            ChatViewEvent::ScrollToEnd { .. } => "scroll.to_end",
            ChatViewEvent::ReplyFailed { .. } => "reply.failed",
        }
    }

    pub fn conversation_id(&self) -> &ConversationId {
        match self {
            ChatViewEvent::MessageAppended {
                conversation_id, ..
            }
            | ChatViewEvent::TypingChanged {
                conversation_id, ..
            }
            | ChatViewEvent::ScrollToEnd { conversation_id }
            | ChatViewEvent::ReplyFailed {
                conversation_id, ..
            } => conversation_id,
        }
    }
}
