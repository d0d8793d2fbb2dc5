use serde::Serialize;
use std::fmt;

use crate::modules::chat::domain::{SessionContext, UserId};

/// 页面名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouteName {
    Login,
    Register,
    Introduction,
    Chat,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Introduction => "Introduction",
            Self::Chat => "Chat",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 聊天页面参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRouteParams {
    pub context: SessionContext,
    pub initial_message: String,
}

/// 带参数的页面
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "params")]
pub enum Route {
    Login,
    Register,
    Introduction { user: UserId },
    Chat(ChatRouteParams),
}

impl Route {
    pub fn name(&self) -> RouteName {
        match self {
            Self::Login => RouteName::Login,
            Self::Register => RouteName::Register,
            Self::Introduction { .. } => RouteName::Introduction,
            Self::Chat(_) => RouteName::Chat,
        }
    }

    pub fn introduction(user: impl Into<UserId>) -> Self {
        Self::Introduction { user: user.into() }
    }

    pub fn chat(context: SessionContext, initial_message: impl Into<String>) -> Self {
        Self::Chat(ChatRouteParams {
            context,
            initial_message: initial_message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_serializes_with_params() {
        let json = serde_json::to_value(Route::introduction("ana")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Introduction", "params": { "user": "ana" } })
        );

        let json = serde_json::to_value(Route::Login).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Login" }));
    }
}
