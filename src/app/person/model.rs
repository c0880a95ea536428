//! Person 数据模型

use serde::{Deserialize, Serialize};

/// 本地持有的人员记录，直接存储在关系数据库中
///
/// 存储中的自增 id 不出现在读取结果中，只作为插入结果返回。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    #[serde(default)]
    #[sqlx(rename = "username")]
    pub name: String,
    #[serde(default)]
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}
