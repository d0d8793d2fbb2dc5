use crate::modules::chat::domain::ChatViewEvent;

/// 聊天事件发布端口
///
/// 由事件总线实现；聊天界面通过它通知订阅者重新渲染
pub trait ChatEventPublisher: Send + Sync {
    fn publish(&self, event: ChatViewEvent);
}
