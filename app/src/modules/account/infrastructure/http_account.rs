// HTTP Account Adapter
//
// 通过 `POST /login` 与 `POST /register` 调用账户服务

use async_trait::async_trait;
use tracing::debug;

use crate::infrastructure::{HttpError, ServiceClient};
use crate::modules::account::domain::Credentials;
use crate::modules::account::ports::{AccountError, AccountPort, LoginReply, RegisterReply};

const LOGIN_ENDPOINT: &str = "login";
const REGISTER_ENDPOINT: &str = "register";

impl From<HttpError> for AccountError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Network(message) | HttpError::Client(message) => {
                AccountError::NetworkError(message)
            }
            HttpError::Status { status, body } => AccountError::ServiceError {
                status,
                message: body,
            },
            HttpError::Decode(message) => AccountError::MalformedResponse(message),
        }
    }
}

/// HTTP 账户适配器
pub struct HttpAccountAdapter {
    client: ServiceClient,
}

impl HttpAccountAdapter {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountPort for HttpAccountAdapter {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply, AccountError> {
        debug!("[HttpAccountAdapter] Logging in as {}", credentials.username());
        Ok(self.client.post_json(LOGIN_ENDPOINT, credentials).await?)
    }

    async fn register(&self, credentials: &Credentials) -> Result<RegisterReply, AccountError> {
        debug!("[HttpAccountAdapter] Registering {}", credentials.username());
        Ok(self.client.post_json(REGISTER_ENDPOINT, credentials).await?)
    }
}
