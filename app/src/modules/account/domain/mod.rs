// Account Domain Layer
// 凭据与登录、注册结果

mod credentials;
mod outcome;

pub use credentials::*;
pub use outcome::*;
