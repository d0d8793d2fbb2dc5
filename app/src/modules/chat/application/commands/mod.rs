// Chat Commands - 命令定义和处理器

mod submit_message;

pub use submit_message::*;
