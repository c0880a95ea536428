//! 业务模块

pub mod person;
pub mod user;

use std::sync::Arc;

use person::PersonStore;
use user::{UserAdapter, UserRpc};

/// 路由共享的依赖，启动时构造一次；请求之间不共享可变状态
#[derive(Clone)]
pub struct AppState {
    pub persons: Arc<dyn PersonStore>,
    pub users: UserAdapter,
}

impl AppState {
    pub fn new(persons: Arc<dyn PersonStore>, user_rpc: Arc<dyn UserRpc>) -> Self {
        Self {
            persons,
            users: UserAdapter::new(user_rpc),
        }
    }
}

/// ANY /hello
pub async fn hello() -> &'static str {
    "Hello World!\n"
}
