use crate::modules::chat::domain::UserId;
use crate::shared::Alert;

/// 服务端表示登录成功的消息
pub const LOGIN_SUCCESSFUL: &str = "Login successful";
/// 服务端表示注册成功的消息
pub const REGISTER_SUCCESSFUL: &str = "Register successful";

/// 登录结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { user: UserId },
    Rejected(Alert),
}

impl LoginOutcome {
    /// 服务端拒绝了凭据
    pub fn invalid_credentials() -> Self {
        Self::Rejected(Alert::new("Invalid credentials"))
    }

    /// 请求失败
    pub fn failed() -> Self {
        Self::Rejected(Alert::new("Error logging in"))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// 注册结果
///
/// 成功与失败都附带提示框
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Registered(Alert),
    Rejected(Alert),
}

impl RegisterOutcome {
    pub fn registered() -> Self {
        Self::Registered(Alert::with_message(
            "Registro exitoso",
            "Tu cuenta ha sido creada con éxito.",
        ))
    }

    pub fn rejected() -> Self {
        Self::Rejected(Alert::with_message(
            "Registro fallido",
            "No se pudo completar el registro. Inténtalo de nuevo.",
        ))
    }

    pub fn failed() -> Self {
        Self::Rejected(Alert::with_message(
            "Error en el registro",
            "Hubo un problema al crear tu cuenta. Inténtalo más tarde.",
        ))
    }

    pub fn alert(&self) -> &Alert {
        match self {
            Self::Registered(alert) | Self::Rejected(alert) => alert,
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Self::Registered(_))
    }
}
