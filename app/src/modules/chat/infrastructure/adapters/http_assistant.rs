// HTTP Assistant Adapter
//
// 通过 `POST /chat` 调用远端法律助手

use async_trait::async_trait;
use tracing::debug;

use crate::infrastructure::{HttpError, ServiceClient};
use crate::modules::chat::ports::{AssistantError, AssistantPort, ChatReply, ChatRequest};

const CHAT_ENDPOINT: &str = "chat";

impl From<HttpError> for AssistantError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Network(message) | HttpError::Client(message) => {
                AssistantError::NetworkError(message)
            }
            HttpError::Status { status, body } => AssistantError::ServiceError {
                status,
                message: body,
            },
            HttpError::Decode(message) => AssistantError::MalformedResponse(message),
        }
    }
}

/// HTTP 助手适配器
pub struct HttpAssistantAdapter {
    client: ServiceClient,
}

impl HttpAssistantAdapter {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssistantPort for HttpAssistantAdapter {
    fn name(&self) -> &str {
        self.client.base_url()
    }

    async fn reply(&self, request: ChatRequest) -> Result<ChatReply, AssistantError> {
        debug!(
            "[HttpAssistantAdapter] Sending message for conversation {}",
            request.conversation_id
        );
        Ok(self.client.post_json(CHAT_ENDPOINT, &request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_server;

    fn request() -> ChatRequest {
        ChatRequest {
            user_input: "Hello".to_string(),
            user: "ana".to_string(),
            conversation_id: "12345".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reply_posts_to_chat_endpoint() {
        let (base_url, captured) =
            test_server::serve_once(200, r#"{"response":"Hi there"}"#).await;
        let adapter =
            HttpAssistantAdapter::new(ServiceClient::with_client(base_url, test_server::client()));

        let reply = adapter.reply(request()).await.unwrap();

        assert_eq!(reply.response, "Hi there");
        let captured = captured.await.unwrap();
        assert_eq!(captured.path, "/chat");
        assert_eq!(
            captured.body,
            serde_json::json!({
                "user_input": "Hello",
                "user": "ana",
                "conversationId": "12345",
            })
        );
    }

    #[tokio::test]
    async fn test_reply_maps_failures() {
        let (base_url, _) = test_server::serve_once(502, "bad gateway").await;
        let adapter =
            HttpAssistantAdapter::new(ServiceClient::with_client(base_url, test_server::client()));
        assert!(matches!(
            adapter.reply(request()).await,
            Err(AssistantError::ServiceError { status: 502, .. })
        ));

        let (base_url, _) = test_server::serve_once(200, r#"{"answer":"nope"}"#).await;
        let adapter =
            HttpAssistantAdapter::new(ServiceClient::with_client(base_url, test_server::client()));
        assert!(matches!(
            adapter.reply(request()).await,
            Err(AssistantError::MalformedResponse(_))
        ));
    }
}
