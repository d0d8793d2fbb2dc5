// Chat Application Layer - 应用层
// 命令处理器与聊天界面状态容器

pub mod commands;
pub mod session_view;

pub use commands::*;
pub use session_view::*;

use async_trait::async_trait;
use thiserror::Error;

use super::ports::AssistantError;

/// 应用层错误类型
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Assistant error: {0}")]
    AssistantError(#[from] AssistantError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 命令处理器 trait
///
/// 命令处理器负责执行有副作用的操作
#[async_trait]
pub trait CommandHandler<C, R>: Send + Sync
where
    C: Send + Sync,
{
    /// 执行命令
    async fn handle(&self, command: C) -> Result<R, ApplicationError>;
}
