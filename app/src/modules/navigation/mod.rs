// Navigation Module - 导航模块
//
// 登录、注册、介绍、聊天四个页面之间的状态机

mod navigator;
mod route;

pub use navigator::{NavigationError, Navigator};
pub use route::{ChatRouteParams, Route, RouteName};
