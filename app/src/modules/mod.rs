// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - chat: 聊天界面与助手服务
// - account: 登录与注册
// - navigation: 页面状态机
// - introduction: 介绍页
// - config: 配置模块，处理应用设置

pub mod account;
pub mod chat;
pub mod config;
pub mod introduction;
pub mod navigation;

pub use account::AccountModule;
pub use chat::ChatModule;
pub use config::ConfigModule;
pub use navigation::Navigator;
