// Account Module - 账户模块
//
// 登录与注册，同样按六边形架构组织

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{LoginHandler, RegisterHandler};
pub use domain::{Credentials, LoginOutcome, RegisterOutcome};
pub use infrastructure::{HttpAccountAdapter, ScriptedAccount};
pub use ports::{AccountError, AccountPort, LoginReply, RegisterReply};

use std::sync::Arc;

/// Account 模块容器
pub struct AccountModule {
    login_handler: LoginHandler,
    register_handler: RegisterHandler,
}

impl AccountModule {
    pub fn new(account: Arc<dyn AccountPort>) -> Self {
        Self {
            login_handler: LoginHandler::new(account.clone()),
            register_handler: RegisterHandler::new(account),
        }
    }

    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> LoginOutcome {
        self.login_handler
            .handle(Credentials::new(username, password))
            .await
    }

    pub async fn register(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> RegisterOutcome {
        self.register_handler
            .handle(Credentials::new(username, password))
            .await
    }
}
