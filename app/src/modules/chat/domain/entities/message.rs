use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::MessageId;

/// 消息发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// 用户
    User,
    /// 法律助手
    Assistant,
}

/// 消息实体
///
/// 创建后不可修改，显示顺序即插入顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    id: MessageId,
    text: String,
    sender: Sender,
    created_at: DateTime<Utc>,
}

impl Message {
    /// 创建用户消息
    pub fn from_user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    /// 创建助手消息
    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }

    fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            text: text.into(),
            sender,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
