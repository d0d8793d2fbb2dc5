// Scripted Assistant
//
// 按脚本依次返回回复的助手实现，用于测试和离线演示

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::modules::chat::ports::{AssistantError, AssistantPort, ChatReply, ChatRequest};

/// 脚本中的一条回复
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    Fail(String),
}

/// 脚本助手
///
/// 脚本耗尽后原样回显用户输入
pub struct ScriptedAssistant {
    script: Mutex<VecDeque<ScriptedReply>>,
    received: Mutex<Vec<ChatRequest>>,
}

impl ScriptedAssistant {
    pub fn new(script: impl IntoIterator<Item = ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            received: Mutex::new(Vec::new()),
        }
    }

    /// 回显助手
    pub fn echo() -> Self {
        Self::new(Vec::new())
    }

    /// 已收到的请求
    pub fn received(&self) -> Vec<ChatRequest> {
        self.received
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AssistantPort for ScriptedAssistant {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn reply(&self, request: ChatRequest) -> Result<ChatReply, AssistantError> {
        if let Ok(mut received) = self.received.lock() {
            received.push(request.clone());
        }

        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front());

        match next {
            Some(ScriptedReply::Text(response)) => Ok(ChatReply { response }),
            Some(ScriptedReply::Fail(reason)) => Err(AssistantError::NetworkError(reason)),
            None => Ok(ChatReply {
                response: request.user_input,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(text: &str) -> ChatRequest {
        ChatRequest {
            user_input: text.to_string(),
            user: "ana".to_string(),
            conversation_id: "12345".to_string(),
        }
    }

    #[tokio::test]
    async fn test_script_then_echo() {
        let assistant = ScriptedAssistant::new(vec![
            ScriptedReply::Text("primera".to_string()),
            ScriptedReply::Fail("offline".to_string()),
        ]);

        assert_eq!(assistant.reply(request("a")).await.unwrap().response, "primera");
        assert!(assistant.reply(request("b")).await.is_err());
        assert_eq!(assistant.reply(request("c")).await.unwrap().response, "c");
        assert_eq!(assistant.received().len(), 3);
    }
}
