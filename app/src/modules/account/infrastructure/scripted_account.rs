// Scripted Account
//
// 内存中的账户服务，用于测试和离线演示

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::modules::account::domain::{Credentials, LOGIN_SUCCESSFUL, REGISTER_SUCCESSFUL};
use crate::modules::account::ports::{AccountError, AccountPort, LoginReply, RegisterReply};

/// 脚本账户服务
///
/// 注册过的用户名可以用相同密码登录；`offline` 模式下所有请求都失败
#[derive(Default)]
pub struct ScriptedAccount {
    users: Mutex<HashMap<String, String>>,
    offline: bool,
}

impl ScriptedAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn with_user(self, username: &str, password: &str) -> Self {
        if let Ok(mut users) = self.users.lock() {
            users.insert(username.to_string(), password.to_string());
        }
        self
    }

    fn check_online(&self) -> Result<(), AccountError> {
        if self.offline {
            return Err(AccountError::NetworkError("service offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountPort for ScriptedAccount {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, AccountError> {
        self.check_online()?;

        let matches = self
            .users
            .lock()
            .map(|users| users.get(credentials.username()).map(String::as_str) == Some(credentials.password()))
            .unwrap_or(false);

        if matches {
            Ok(LoginReply {
                message: LOGIN_SUCCESSFUL.to_string(),
                user: Some(credentials.username().to_string()),
            })
        } else {
            Ok(LoginReply {
                message: "Invalid username or password".to_string(),
                user: None,
            })
        }
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterReply, AccountError> {
        self.check_online()?;

        let mut users = self
            .users
            .lock()
            .map_err(|e| AccountError::NetworkError(e.to_string()))?;

        if users.contains_key(credentials.username()) {
            return Ok(RegisterReply {
                message: "Username already exists".to_string(),
            });
        }
        users.insert(
            credentials.username().to_string(),
            credentials.password().to_string(),
        );

        Ok(RegisterReply {
            message: REGISTER_SUCCESSFUL.to_string(),
        })
    }
}
