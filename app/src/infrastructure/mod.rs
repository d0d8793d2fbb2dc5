// Infrastructure Layer - 应用级基础设施
//
// - event_bus: 事件总线（订阅/通知）
// - http: 访问法律助手服务的 HTTP 客户端
// - state: 应用全局状态

pub mod event_bus;
pub mod http;
pub mod state;

#[cfg(test)]
pub(crate) mod test_server;

pub use event_bus::*;
pub use http::*;
pub use state::*;
