//! # Person/User 网关
//!
//! 这个库把 REST 风格的 JSON 请求翻译成两类后端调用：
//! - `persons`：直接读写关系数据库 (sqlx / PostgreSQL)
//! - `users`：转发到远程用户服务 (tonic gRPC)
//!
//! 所有依赖在启动时显式构造，通过 [`app::AppState`] 注入路由。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod lifecycle;
pub mod router;

pub use app::AppState;
pub use config::{Config, ConfigError};
pub use router::create_router;
