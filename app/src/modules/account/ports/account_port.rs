use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::modules::account::domain::Credentials;

/// 账户服务错误类型
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {status} - {message}")]
    ServiceError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// `POST /login` 响应体
///
/// 字段缺失时按空值处理，由应用层判断结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginReply {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<String>,
}

/// `POST /register` 响应体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterReply {
    #[serde(default)]
    pub message: String,
}

/// 账户服务端口
#[async_trait]
pub trait AccountPort: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, AccountError>;

    async fn register(&self, credentials: &Credentials) -> Result<RegisterReply, AccountError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_reply_tolerates_missing_fields() {
        let reply: LoginReply =
            serde_json::from_str(r#"{"message":"Login successful","user":"ana"}"#).unwrap();
        assert_eq!(reply.user.as_deref(), Some("ana"));

        let reply: LoginReply = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
        assert_eq!(reply, LoginReply::default());
    }
}
