// Introduction Module - 介绍页
//
// 登录后的欢迎页：标题、助手自我介绍（打字机效果）以及进入聊天

mod typewriter;

pub use typewriter::Typewriter;

use std::time::Duration;

use crate::modules::chat::domain::{SessionContext, UserId};
use crate::modules::config::{ChatDefaults, IntroductionConfig};
use crate::modules::navigation::Route;

/// 助手的自我介绍
pub const INTRODUCTION_TEXT: &str = "Hola, soy Nova, tu asistente virtual legal. \
Estoy aquí para ofrecerte apoyo y orientación en temas de derecho. \
Puedes consultarme sobre cualquier duda o pregunta legal que tengas, \
y te proporcionaré información precisa y recursos útiles. \
Juntos exploraremos tus inquietudes legales y te brindaré el acompañamiento necesario.";

/// 介绍页
#[derive(Debug, Clone)]
pub struct Introduction {
    user: UserId,
}

impl Introduction {
    pub fn new(user: impl Into<UserId>) -> Self {
        Self { user: user.into() }
    }

    pub fn user(&self) -> &UserId {
        &self.user
    }

    pub fn title(&self) -> String {
        format!("¡Hola, {}!", self.user)
    }

    pub fn text(&self) -> &'static str {
        INTRODUCTION_TEXT
    }

    pub fn typewriter(&self, config: &IntroductionConfig) -> Typewriter {
        Typewriter::new(
            INTRODUCTION_TEXT,
            Duration::from_millis(config.reveal_interval_ms),
        )
    }

    /// "Continuar"：用默认会话参数进入聊天
    pub fn continue_route(&self, defaults: &ChatDefaults) -> Route {
        let context = SessionContext::new(
            defaults.emotion,
            self.user.clone(),
            defaults.conversation_id.as_str(),
            defaults.conversation_name.as_str(),
        );
        Route::chat(context, defaults.initial_message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::domain::Emotion;
    use crate::modules::navigation::RouteName;

    #[test]
    fn test_title() {
        assert_eq!(Introduction::new("ana").title(), "¡Hola, ana!");
    }

    #[test]
    fn test_continue_uses_defaults() {
        let route = Introduction::new("ana").continue_route(&ChatDefaults::default());

        assert_eq!(route.name(), RouteName::Chat);
        let Route::Chat(params) = route else {
            panic!("expected chat route");
        };
        assert_eq!(params.initial_message, "Hola soy Nova, espero serte de mucha ayuda");
        assert_eq!(params.context.user().as_str(), "ana");
        assert_eq!(params.context.emotion(), Emotion::Neutral);
        assert_eq!(params.context.conversation_id().as_str(), "12345");
        assert_eq!(params.context.conversation_name(), "Chat inicial");
    }

    #[test]
    fn test_typewriter_uses_configured_interval() {
        let typewriter =
            Introduction::new("ana").typewriter(&IntroductionConfig::default());

        assert_eq!(typewriter.interval(), Duration::from_millis(50));
        assert_eq!(typewriter.frames().last(), Some(INTRODUCTION_TEXT));
    }
}
