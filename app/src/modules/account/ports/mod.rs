// Account Ports Layer

mod account_port;

pub use account_port::*;
