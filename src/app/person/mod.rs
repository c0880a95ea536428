//! persons 资源：直接读写关系数据库

pub mod handler;
pub mod model;
pub mod service;

pub use model::Person;
pub use service::{PersonStore, PgPersonStore, StoreError};
