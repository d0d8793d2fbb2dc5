use serde::{Deserialize, Serialize};

use super::{ConversationId, Emotion, UserId};

/// 会话上下文
///
/// 打开聊天界面时传入，生命周期内不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    emotion: Emotion,
    user: UserId,
    conversation_id: ConversationId,
    conversation_name: String,
}

impl SessionContext {
    pub fn new(
        emotion: Emotion,
        user: impl Into<UserId>,
        conversation_id: impl Into<ConversationId>,
        conversation_name: impl Into<String>,
    ) -> Self {
        Self {
            emotion,
            user: user.into(),
            conversation_id: conversation_id.into(),
            conversation_name: conversation_name.into(),
        }
    }

    pub fn emotion(&self) -> Emotion {
        self.emotion
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn conversation_id(&self) -> &ConversationId {
        &self.conversation_id
    }

    pub fn conversation_name(&self) -> &str {
        &self.conversation_name
    }
}
