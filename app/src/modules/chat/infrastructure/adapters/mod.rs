// Assistant Adapters
// 助手服务端口的实现

mod http_assistant;
mod scripted_assistant;

pub use http_assistant::*;
pub use scripted_assistant::*;
