use tokio::sync::broadcast;

use crate::modules::chat::domain::ChatViewEvent;
use crate::modules::chat::ports::ChatEventPublisher;
use crate::modules::navigation::Route;
use crate::shared::Alert;

#[derive(Clone, Debug)]
pub enum AppEvent {
    /// 聊天界面状态变化
    Chat(ChatViewEvent),
    /// 当前页面变化
    RouteChanged { route: Route },
    /// 模态提示
    Alert(Alert),
}

/// 事件总线
///
/// 前端通过 `subscribe` 订阅状态变化；没有订阅者时事件被丢弃
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        match &event {
            AppEvent::Chat(chat_event) => {
                tracing::debug!(
                    "[EventBus] Publishing {} for conversation {}",
                    chat_event.event_type(),
                    chat_event.conversation_id()
                );
            }
            AppEvent::RouteChanged { route } => {
                tracing::info!("[EventBus] Route changed to {}", route.name());
            }
            AppEvent::Alert(alert) => {
                tracing::info!("[EventBus] Alert: {}", alert);
            }
        }
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatEventPublisher for EventBus {
    fn publish(&self, event: ChatViewEvent) {
        EventBus::publish(self, AppEvent::Chat(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::ConversationId;

    #[tokio::test]
    async fn test_subscriber_receives_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.publish(AppEvent::Alert(Alert::new("Invalid credentials")));
        ChatEventPublisher::publish(
            &bus,
            ChatViewEvent::ScrollToEnd {
                conversation_id: ConversationId::from("12345"),
            },
        );

        match rx.recv().await.unwrap() {
            AppEvent::Alert(alert) => assert_eq!(alert.title, "Invalid credentials"),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(matches!(
            rx.recv().await.unwrap(),
            AppEvent::Chat(ChatViewEvent::ScrollToEnd { .. })
        ));
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.publish(AppEvent::Alert(Alert::new("nobody listens")));
    }
}
