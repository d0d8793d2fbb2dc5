// Navigation Commands
//
// 页面切换；进入聊天页时打开聊天界面，离开时关闭

use tracing::debug;

use crate::infrastructure::{AppEvent, AppState};
use crate::modules::introduction::Introduction;
use crate::modules::navigation::{NavigationError, Route, RouteName};
use crate::shared::AppResult;

/// 当前页面
pub async fn navigation_current(state: &AppState) -> Route {
    state.navigator.read().await.current().clone()
}

/// 前往新页面
pub async fn navigation_go(state: &AppState, route: Route) -> AppResult<Route> {
    let current = {
        let mut navigator = state.navigator.write().await;
        navigator.navigate(route)?.clone()
    };
    on_route_changed(state, &current).await;
    Ok(current)
}

/// 返回上一页
pub async fn navigation_back(state: &AppState) -> AppResult<Route> {
    let current = {
        let mut navigator = state.navigator.write().await;
        navigator.back()?.clone()
    };
    on_route_changed(state, &current).await;
    Ok(current)
}

/// 介绍页的"继续"
pub async fn introduction_continue(state: &AppState) -> AppResult<Route> {
    let user = match navigation_current(state).await {
        Route::Introduction { user } => user,
        other => {
            return Err(NavigationError::InvalidTransition {
                from: other.name(),
                to: RouteName::Chat,
            }
            .into())
        }
    };

    let defaults = state.config.read().await.chat.clone();
    navigation_go(state, Introduction::new(user).continue_route(&defaults)).await
}

async fn on_route_changed(state: &AppState, current: &Route) {
    state.event_bus.publish(AppEvent::RouteChanged {
        route: current.clone(),
    });

    let mut active = state.active_chat.write().await;
    match current {
        Route::Chat(params) => {
            *active = Some(
                state
                    .chat
                    .open_view(params.context.clone(), params.initial_message.clone()),
            );
        }
        _ => {
            if let Some(view) = active.take() {
                debug!(
                    "[Navigation] Closed chat view for conversation {}",
                    view.conversation_id()
                );
            }
        }
    }
}
