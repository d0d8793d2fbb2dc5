// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};

use super::value_objects::{BaseUrl, LogLevel};
use crate::modules::chat::domain::Emotion;

/// 助手服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceConfig {
    pub base_url: BaseUrl,
    /// 请求超时（秒），缺省时不设超时
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// 从介绍页进入聊天时使用的默认会话参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatDefaults {
    pub conversation_name: String,
    pub emotion: Emotion,
    pub initial_message: String,
    pub conversation_id: String,
}

impl Default for ChatDefaults {
    fn default() -> Self {
        Self {
            conversation_name: "Chat inicial".to_string(),
            emotion: Emotion::Neutral,
            initial_message: "Hola soy Nova, espero serte de mucha ayuda".to_string(),
            conversation_id: "12345".to_string(),
        }
    }
}

/// 介绍页配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntroductionConfig {
    /// 打字机效果每个字符的间隔（毫秒）
    pub reveal_interval_ms: u64,
}

impl Default for IntroductionConfig {
    fn default() -> Self {
        Self {
            reveal_interval_ms: 50,
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

/// 应用配置聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub chat: ChatDefaults,
    pub introduction: IntroductionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并部分配置更新
    pub fn merge(&mut self, partial: PartialAppConfig) {
        if let Some(service) = partial.service {
            if let Some(base_url) = service.base_url {
                self.service.base_url = base_url;
            }
            if let Some(timeout_secs) = service.timeout_secs {
                self.service.timeout_secs = Some(timeout_secs);
            }
        }

        if let Some(chat) = partial.chat {
            if let Some(conversation_name) = chat.conversation_name {
                self.chat.conversation_name = conversation_name;
            }
            if let Some(emotion) = chat.emotion {
                self.chat.emotion = emotion;
            }
            if let Some(initial_message) = chat.initial_message {
                self.chat.initial_message = initial_message;
            }
            if let Some(conversation_id) = chat.conversation_id {
                self.chat.conversation_id = conversation_id;
            }
        }

        if let Some(introduction) = partial.introduction {
            if let Some(reveal_interval_ms) = introduction.reveal_interval_ms {
                self.introduction.reveal_interval_ms = reveal_interval_ms;
            }
        }

        if let Some(logging) = partial.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
        }

        self.normalize();
    }

    /// 规范化：超时为 0 表示不设超时
    pub fn normalize(&mut self) {
        if self.service.timeout_secs == Some(0) {
            self.service.timeout_secs = None;
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.service.base_url.is_valid() {
            errors.push(format!(
                "Invalid service base URL: {:?}",
                self.service.base_url.as_str()
            ));
        }

        if self.chat.conversation_id.trim().is_empty() {
            errors.push("Default conversation id must not be empty".to_string());
        }

        if self.introduction.reveal_interval_ms > 10_000 {
            errors.push("Reveal interval must be at most 10000 ms".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 部分配置更新（用于合并）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialAppConfig {
    pub service: Option<PartialServiceConfig>,
    pub chat: Option<PartialChatDefaults>,
    pub introduction: Option<PartialIntroductionConfig>,
    pub logging: Option<PartialLoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialServiceConfig {
    pub base_url: Option<BaseUrl>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialChatDefaults {
    pub conversation_name: Option<String>,
    pub emotion: Option<Emotion>,
    pub initial_message: Option<String>,
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialIntroductionConfig {
    pub reveal_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialLoggingConfig {
    pub level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(
            config.service.base_url.as_str(),
            "https://web-production-c396.up.railway.app"
        );
        assert_eq!(config.service.timeout_secs, None);
        assert_eq!(config.chat.conversation_name, "Chat inicial");
        assert_eq!(config.chat.emotion, Emotion::Neutral);
        assert_eq!(config.chat.conversation_id, "12345");
        assert_eq!(config.introduction.reveal_interval_ms, 50);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_app_config_merge() {
        let mut config = AppConfig::default();
        config.merge(PartialAppConfig {
            service: Some(PartialServiceConfig {
                timeout_secs: Some(30),
                ..Default::default()
            }),
            chat: Some(PartialChatDefaults {
                emotion: Some(Emotion::Anxious),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(config.service.timeout_secs, Some(30));
        assert_eq!(config.chat.emotion, Emotion::Anxious);
        // 其他字段保持不变
        assert_eq!(config.chat.conversation_name, "Chat inicial");

        config.merge(PartialAppConfig {
            service: Some(PartialServiceConfig {
                timeout_secs: Some(0),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(config.service.timeout_secs, None);
    }

    #[test]
    fn test_app_config_validate() {
        assert!(AppConfig::default().validate().is_ok());

        let mut invalid = AppConfig::default();
        invalid.service.base_url = BaseUrl::new("localhost");
        invalid.chat.conversation_id = " ".to_string();
        assert_eq!(invalid.validate().unwrap_err().len(), 2);
    }

    #[test]
    fn test_normalize_zero_timeout() {
        let mut config: AppConfig =
            serde_json::from_str(r#"{"service":{"timeoutSecs":0}}"#).unwrap();
        assert_eq!(config.service.timeout_secs, Some(0));

        config.normalize();
        assert_eq!(config.service.timeout_secs, None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"service":{"baseUrl":"http://localhost:8000"}}"#).unwrap();

        assert_eq!(config.service.base_url.as_str(), "http://localhost:8000");
        assert_eq!(config.chat, ChatDefaults::default());
    }
}
