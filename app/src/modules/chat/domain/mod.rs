// Chat Domain Layer
// 领域层包含实体、值对象和领域事件

pub mod entities;
pub mod events;
pub mod value_objects;

pub use entities::{Conversation, Message, Sender};
pub use events::*;
pub use value_objects::{ConversationId, Emotion, MessageId, SessionContext, UserId};
