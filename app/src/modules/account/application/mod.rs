// Account Application Layer
//
// 把服务回复解释为登录、注册结果

use std::sync::Arc;
use tracing::{error, info, warn};

use super::domain::{
    Credentials, LoginOutcome, RegisterOutcome, LOGIN_SUCCESSFUL, REGISTER_SUCCESSFUL,
};
use super::ports::AccountPort;
use crate::modules::chat::domain::UserId;

/// 登录处理器
pub struct LoginHandler {
    account: Arc<dyn AccountPort>,
}

impl LoginHandler {
    pub fn new(account: Arc<dyn AccountPort>) -> Self {
        Self { account }
    }

    /// 回复中缺少 `user` 时沿用提交的用户名
    pub async fn handle(&self, credentials: Credentials) -> LoginOutcome {
        match self.account.login(&credentials).await {
            Ok(reply) if reply.message == LOGIN_SUCCESSFUL => {
                let user = reply
                    .user
                    .unwrap_or_else(|| credentials.username().to_string());
                info!("[LoginHandler] Logged in as {}", user);
                LoginOutcome::Authenticated {
                    user: UserId::new(user),
                }
            }
            Ok(reply) => {
                warn!(
                    "[LoginHandler] Login rejected for {}: {:?}",
                    credentials.username(),
                    reply.message
                );
                LoginOutcome::invalid_credentials()
            }
            Err(e) => {
                error!("[LoginHandler] Login request failed: {}", e);
                LoginOutcome::failed()
            }
        }
    }
}

/// 注册处理器
pub struct RegisterHandler {
    account: Arc<dyn AccountPort>,
}

impl RegisterHandler {
    pub fn new(account: Arc<dyn AccountPort>) -> Self {
        Self { account }
    }

    pub async fn handle(&self, credentials: Credentials) -> RegisterOutcome {
        match self.account.register(&credentials).await {
            Ok(reply) if reply.message == REGISTER_SUCCESSFUL => {
                info!("[RegisterHandler] Registered {}", credentials.username());
                RegisterOutcome::registered()
            }
            Ok(reply) => {
                warn!(
                    "[RegisterHandler] Registration rejected for {}: {:?}",
                    credentials.username(),
                    reply.message
                );
                RegisterOutcome::rejected()
            }
            Err(e) => {
                error!("[RegisterHandler] Registration request failed: {}", e);
                RegisterOutcome::failed()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::account::infrastructure::ScriptedAccount;
    use crate::modules::account::ports::{AccountError, LoginReply, RegisterReply};
    use crate::shared::Alert;
    use async_trait::async_trait;

    /// 固定回复的账户服务
    struct FixedAccount {
        login: LoginReply,
    }

    #[async_trait]
    impl AccountPort for FixedAccount {
        async fn login(&self, _credentials: &Credentials) -> Result<LoginReply, AccountError> {
            Ok(self.login.clone())
        }

        async fn register(&self, _credentials: &Credentials) -> Result<RegisterReply, AccountError> {
            Ok(RegisterReply::default())
        }
    }

    #[tokio::test]
    async fn test_login_uses_returned_user() {
        let handler = LoginHandler::new(Arc::new(FixedAccount {
            login: LoginReply {
                message: LOGIN_SUCCESSFUL.to_string(),
                user: Some("Ana María".to_string()),
            },
        }));

        let outcome = handler.handle(Credentials::new("ana", "x")).await;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                user: UserId::new("Ana María")
            }
        );
    }

    #[tokio::test]
    async fn test_login_falls_back_to_username() {
        let handler = LoginHandler::new(Arc::new(FixedAccount {
            login: LoginReply {
                message: LOGIN_SUCCESSFUL.to_string(),
                user: None,
            },
        }));

        let outcome = handler.handle(Credentials::new("ana", "x")).await;

        assert_eq!(
            outcome,
            LoginOutcome::Authenticated {
                user: UserId::new("ana")
            }
        );
    }

    #[tokio::test]
    async fn test_login_alerts() {
        let handler = LoginHandler::new(Arc::new(ScriptedAccount::new()));
        assert_eq!(
            handler.handle(Credentials::new("ana", "x")).await,
            LoginOutcome::Rejected(Alert::new("Invalid credentials"))
        );

        let handler = LoginHandler::new(Arc::new(ScriptedAccount::offline()));
        assert_eq!(
            handler.handle(Credentials::new("ana", "x")).await,
            LoginOutcome::Rejected(Alert::new("Error logging in"))
        );
    }

    #[tokio::test]
    async fn test_register_outcomes() {
        let handler = RegisterHandler::new(Arc::new(ScriptedAccount::new().with_user("luis", "1")));

        let outcome = handler.handle(Credentials::new("ana", "x")).await;
        assert!(outcome.is_registered());
        assert_eq!(outcome.alert().title, "Registro exitoso");

        let outcome = handler.handle(Credentials::new("luis", "2")).await;
        assert_eq!(outcome, RegisterOutcome::rejected());

        let handler = RegisterHandler::new(Arc::new(ScriptedAccount::offline()));
        let outcome = handler.handle(Credentials::new("ana", "x")).await;
        assert_eq!(outcome.alert().title, "Error en el registro");
    }
}
