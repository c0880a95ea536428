//! User 数据模型

use serde::{Deserialize, Serialize};

use crate::infrastructure::user_rpc::proto;

/// 远程服务持有的用户，本地只做解码后转发
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct User {
    #[serde(rename = "firstname", alias = "firstName")]
    pub first_name: String,
    pub age: u8,
    pub address: Address,
}

/// 嵌入在 User 中的地址值对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Address {
    pub city: String,
    #[serde(rename = "zipCode", alias = "zip_code")]
    pub zip_code: String,
}

/// 远程服务返回的用户表示，原样输出
///
/// 字段名沿用 protobuf 字段名，零值字段省略。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub firstname: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub age: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zip_code: String,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl From<User> for proto::User {
    fn from(user: User) -> Self {
        proto::User {
            firstname: user.first_name,
            age: u32::from(user.age),
            address: Some(proto::Address {
                city: user.address.city,
                zip_code: user.address.zip_code,
            }),
        }
    }
}

impl From<proto::User> for UserRecord {
    fn from(user: proto::User) -> Self {
        UserRecord {
            firstname: user.firstname,
            age: user.age,
            address: user.address.map(|a| AddressRecord {
                city: a.city,
                zip_code: a.zip_code,
            }),
        }
    }
}
