use super::super::value_objects::SessionContext;
use super::Message;

/// 对话聚合根
///
/// 持有聊天界面的全部本地状态：消息序列、输入缓冲区和等待中的回复数。
/// 消息序列只追加，不修改、不删除、不去重。
#[derive(Debug, Clone)]
pub struct Conversation {
    context: SessionContext,
    messages: Vec<Message>,
    input: String,
    pending_replies: usize,
}

impl Conversation {
    /// 打开对话，以助手的问候语作为第一条消息
    pub fn open(context: SessionContext, initial_message: impl Into<String>) -> Self {
        Self {
            context,
            messages: vec![Message::from_assistant(initial_message)],
            input: String::new(),
            pending_replies: 0,
        }
    }

    // Getters
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    /// 是否有请求仍在等待回复
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    // 业务方法

    /// 更新输入缓冲区
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// 提交用户消息（乐观追加）
    ///
    /// 空白文本不做任何修改并返回 `None`；否则追加用户消息、清空输入缓冲区，
    /// 并登记一个等待中的回复。
    pub fn submit(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::from_user(text));
        self.input.clear();
        self.pending_replies += 1;
        self.messages.last()
    }

    /// 回复到达：追加助手消息
    pub fn resolve_reply(&mut self, text: impl Into<String>) -> &Message {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        self.messages.push(Message::from_assistant(text));
        &self.messages[self.messages.len() - 1]
    }

    /// 请求失败：消息序列保持不变
    pub fn fail_reply(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::{Emotion, Sender};

    fn context() -> SessionContext {
        SessionContext::new(Emotion::Neutral, "ana", "12345", "Chat inicial")
    }

    #[test]
    fn test_open_seeds_greeting() {
        let conversation = Conversation::open(context(), "Hola");

        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.messages()[0].text(), "Hola");
        assert_eq!(conversation.messages()[0].sender(), Sender::Assistant);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_submit_whitespace_is_noop() {
        let mut conversation = Conversation::open(context(), "Hola");
        conversation.set_input("   ");

        assert!(conversation.submit("   ").is_none());
        assert!(conversation.submit("").is_none());
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.input(), "   ");
        assert!(!conversation.is_typing());
    }

    #[test]
    fn test_submit_appends_and_clears_input() {
        let mut conversation = Conversation::open(context(), "Hola");
        conversation.set_input("Hello");

        let message = conversation.submit("Hello").cloned().unwrap();

        assert_eq!(message.text(), "Hello");
        assert_eq!(message.sender(), Sender::User);
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.input(), "");
        assert!(conversation.is_typing());
    }

    #[test]
    fn test_resolve_and_fail_settle_pending() {
        let mut conversation = Conversation::open(context(), "Hola");
        conversation.submit("uno");
        conversation.submit("dos");
        assert_eq!(conversation.pending_replies(), 2);

        conversation.fail_reply();
        assert!(conversation.is_typing());
        assert_eq!(conversation.len(), 3);

        conversation.resolve_reply("respuesta");
        assert!(!conversation.is_typing());
        assert_eq!(conversation.len(), 4);
        assert_eq!(conversation.last_message().unwrap().text(), "respuesta");
    }

    #[test]
    fn test_pending_never_underflows() {
        let mut conversation = Conversation::open(context(), "Hola");
        conversation.fail_reply();
        assert_eq!(conversation.pending_replies(), 0);
    }
}
