//! 核心模块：错误映射、请求体提取与中间件

pub mod error;
pub mod extract;
pub mod middleware;

pub use error::CoreError;
pub use extract::JsonBody;
