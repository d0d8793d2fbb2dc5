// Chat Infrastructure Layer
// 基础设施层包含端口的具体实现

pub mod adapters;

pub use adapters::{HttpAssistantAdapter, ScriptedAssistant, ScriptedReply};
