//! users 资源：转发到远程用户服务

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Address, AddressRecord, User, UserRecord};
pub use service::{UserAdapter, UserError, UserRpc};
