// Chat Ports Layer
// 端口定义了模块与外部世界的接口

mod assistant_port;
mod event_publisher;

pub use assistant_port::*;
pub use event_publisher::*;
