// Chat Commands
//
// 作用于当前打开的聊天界面

use crate::infrastructure::AppState;
use crate::modules::chat::{ChatSnapshot, PendingReply};
use crate::shared::{AppError, AppResult};

pub async fn chat_snapshot(state: &AppState) -> AppResult<ChatSnapshot> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    Ok(view.snapshot().await)
}

pub async fn chat_set_input(state: &AppState, text: &str) -> AppResult<()> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    view.set_input(text).await;
    Ok(())
}

/// 发送按钮
pub async fn chat_send(state: &AppState) -> AppResult<Option<PendingReply>> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    Ok(view.send().await)
}

/// 直接提交一段文本（空白文本返回 `None`）
pub async fn chat_submit(state: &AppState, text: &str) -> AppResult<Option<PendingReply>> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    Ok(view.submit(text).await)
}

pub async fn chat_focus_input(state: &AppState) -> AppResult<()> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    view.notify_input_focused();
    Ok(())
}

pub async fn chat_keyboard_shown(state: &AppState) -> AppResult<()> {
    let active = state.active_chat.read().await;
    let view = active.as_ref().ok_or(AppError::NoActiveSession)?;
    view.notify_keyboard_shown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::navigation::{introduction_continue, navigation_go};
    use crate::commands::test_state;
    use crate::infrastructure::AppEvent;
    use crate::modules::chat::{ChatViewEvent, ReplyOutcome, Sender};
    use crate::modules::navigation::Route;

    async fn chat_state() -> AppState {
        let state = test_state();
        navigation_go(&state, Route::introduction("ana")).await.unwrap();
        introduction_continue(&state).await.unwrap();
        state
    }

    #[tokio::test]
    async fn test_commands_require_active_chat() {
        let state = test_state();
        assert!(matches!(
            chat_submit(&state, "Hello").await,
            Err(AppError::NoActiveSession)
        ));
        assert!(matches!(
            chat_focus_input(&state).await,
            Err(AppError::NoActiveSession)
        ));
    }

    #[tokio::test]
    async fn test_send_round_trip() {
        let state = chat_state().await;
        chat_set_input(&state, "Hello").await.unwrap();

        let pending = chat_send(&state).await.unwrap().unwrap();
        assert!(chat_snapshot(&state).await.unwrap().input.is_empty());
        assert!(matches!(pending.outcome().await, ReplyOutcome::Resolved(_)));

        let snapshot = chat_snapshot(&state).await.unwrap();
        assert_eq!(snapshot.messages.len(), 3);
        assert_eq!(snapshot.messages[1].sender(), Sender::User);
        assert!(!snapshot.is_typing);
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let state = chat_state().await;
        assert!(chat_submit(&state, "   ").await.unwrap().is_none());
        assert_eq!(chat_snapshot(&state).await.unwrap().messages.len(), 1);
    }

    #[tokio::test]
    async fn test_keyboard_shown_scrolls_to_end() {
        let state = test_state();
        assert!(matches!(
            chat_keyboard_shown(&state).await,
            Err(AppError::NoActiveSession)
        ));

        let state = chat_state().await;
        let mut events = state.event_bus.subscribe();
        chat_keyboard_shown(&state).await.unwrap();

        assert!(matches!(
            events.try_recv(),
            Ok(AppEvent::Chat(ChatViewEvent::ScrollToEnd { .. }))
        ));
    }
}
