// Account Commands
//
// 登录、注册以及随后的页面切换与提示

use super::navigation::navigation_go;
use crate::infrastructure::{AppEvent, AppState};
use crate::modules::account::{LoginOutcome, RegisterOutcome};
use crate::modules::navigation::{Route, RouteName};
use crate::shared::AppResult;

/// 登录成功后进入介绍页，否则弹出提示
pub async fn account_login(
    state: &AppState,
    username: &str,
    password: &str,
) -> AppResult<LoginOutcome> {
    state.navigator.read().await.ensure_on(RouteName::Login)?;

    let outcome = state.account.login(username, password).await;
    match &outcome {
        LoginOutcome::Authenticated { user } => {
            navigation_go(state, Route::introduction(user.clone())).await?;
        }
        LoginOutcome::Rejected(alert) => {
            state.event_bus.publish(AppEvent::Alert(alert.clone()));
        }
    }

    Ok(outcome)
}

/// 注册后总是弹出提示，成功时回到登录页
pub async fn account_register(
    state: &AppState,
    username: &str,
    password: &str,
) -> AppResult<RegisterOutcome> {
    state.navigator.read().await.ensure_on(RouteName::Register)?;

    let outcome = state.account.register(username, password).await;
    state
        .event_bus
        .publish(AppEvent::Alert(outcome.alert().clone()));

    if outcome.is_registered() {
        navigation_go(state, Route::Login).await?;
    }

    Ok(outcome)
}
