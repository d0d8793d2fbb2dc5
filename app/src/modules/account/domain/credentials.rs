use serde::Serialize;
use std::fmt;

/// 登录、注册凭据
///
/// 原样发送给服务，不做裁剪或校验。`Debug` 输出中密码被隐藏。
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_password() {
        let credentials = Credentials::new("ana", "s3cret");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("ana"));
        assert!(!debug.contains("s3cret"));
    }

    #[test]
    fn test_wire_format() {
        let credentials = Credentials::new("ana", "s3cret");
        assert_eq!(
            serde_json::to_value(&credentials).unwrap(),
            serde_json::json!({ "username": "ana", "password": "s3cret" })
        );
    }
}
