//! 基础设施：数据库连接池、日志、远程用户服务客户端

pub mod database;
pub mod logger;
pub mod user_rpc;

pub use database::DatabaseManager;
pub use logger::Logger;
pub use user_rpc::GrpcUserClient;
