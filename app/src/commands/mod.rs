// Commands - 面向前端的操作
//
// 每个操作接收 `&AppState`，由终端 shell 调用

pub mod account;
pub mod chat;
pub mod config;
pub mod navigation;
pub mod shell;

pub use account::*;
pub use chat::*;
pub use config::*;
pub use navigation::*;

#[cfg(test)]
pub(crate) fn test_state() -> crate::infrastructure::AppState {
    use crate::modules::account::ScriptedAccount;
    use crate::modules::chat::ScriptedAssistant;
    use crate::modules::config::AppConfig;
    use crate::modules::ConfigModule;
    use std::sync::Arc;

    crate::infrastructure::AppState::new(
        ConfigModule::new_in_memory(),
        AppConfig::default(),
        Arc::new(ScriptedAssistant::echo()),
        Arc::new(ScriptedAccount::new().with_user("ana", "s3cret")),
    )
}
