use thiserror::Error;
use tracing::debug;

use super::route::{Route, RouteName};

/// 导航错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Cannot navigate from {from} to {to}")]
    InvalidTransition { from: RouteName, to: RouteName },

    #[error("Already at the first screen")]
    AtRoot,

    #[error("Not on the {expected} screen (current: {current})")]
    NotOn {
        expected: RouteName,
        current: RouteName,
    },
}

/// 栈式导航器
///
/// 初始页面为登录页。导航到栈中已有的页面时回退到该页面并替换参数，
/// 否则压栈。
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Login],
        }
    }

    /// 允许的前进转换
    pub fn can_transition(from: RouteName, to: RouteName) -> bool {
        matches!(
            (from, to),
            (RouteName::Login, RouteName::Register)
                | (RouteName::Login, RouteName::Introduction)
                | (RouteName::Register, RouteName::Login)
                | (RouteName::Introduction, RouteName::Chat)
        )
    }

    pub fn current(&self) -> &Route {
        // 栈至少保留根页面
        &self.stack[self.stack.len() - 1]
    }

    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// 要求当前处于指定页面
    pub fn ensure_on(&self, expected: RouteName) -> Result<&Route, NavigationError> {
        let current = self.current();
        if current.name() != expected {
            return Err(NavigationError::NotOn {
                expected,
                current: current.name(),
            });
        }
        Ok(current)
    }

    pub fn navigate(&mut self, route: Route) -> Result<&Route, NavigationError> {
        let from = self.current().name();
        let to = route.name();
        if !Self::can_transition(from, to) {
            return Err(NavigationError::InvalidTransition { from, to });
        }

        if let Some(position) = self.stack.iter().position(|r| r.name() == to) {
            self.stack.truncate(position);
        }
        self.stack.push(route);

        debug!("[Navigator] {} -> {} (depth {})", from, to, self.stack.len());
        Ok(self.current())
    }

    pub fn back(&mut self) -> Result<&Route, NavigationError> {
        if self.stack.len() <= 1 {
            return Err(NavigationError::AtRoot);
        }
        self.stack.pop();
        Ok(self.current())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
