// Account Infrastructure Layer

mod http_account;
mod scripted_account;

pub use http_account::*;
pub use scripted_account::*;
