// Config Application Layer
//
// 读取、合并、校验并保存配置

pub mod service;

pub use service::*;
