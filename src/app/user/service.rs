//! 远程用户服务适配层

use std::num::ParseIntError;
use std::sync::Arc;

use async_trait::async_trait;
use tonic::Status;
use tracing::error;

use super::model::{User, UserRecord};
use crate::infrastructure::user_rpc::proto::{
    CreateUserRequest, CreateUserResponse, ReadUserRequest, ReadUserResponse,
};

/// 远程调用接口，对应 UserService 的两个方法
#[async_trait]
pub trait UserRpc: Send + Sync {
    async fn get_user(&self, request: ReadUserRequest) -> Result<ReadUserResponse, Status>;
    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Status>;
}

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("invalid user id: {0}")]
    InvalidId(#[from] ParseIntError),
    #[error("rpc error: code = {code:?} desc = {message}")]
    Remote { code: tonic::Code, message: String },
}

impl From<Status> for UserError {
    fn from(status: Status) -> Self {
        UserError::Remote {
            code: status.code(),
            message: status.message().to_string(),
        }
    }
}

/// 把本地请求翻译为远程调用，不做重试
#[derive(Clone)]
pub struct UserAdapter {
    rpc: Arc<dyn UserRpc>,
}

impl UserAdapter {
    pub fn new(rpc: Arc<dyn UserRpc>) -> Self {
        Self { rpc }
    }

    /// 解析路径中的 id；解析失败时不发起远程调用
    pub async fn fetch_user(&self, raw_id: &str) -> Result<Option<UserRecord>, UserError> {
        let id: i64 = raw_id.parse()?;

        let response = self
            .rpc
            .get_user(ReadUserRequest { id })
            .await
            .map_err(|status| {
                error!(id, code = ?status.code(), "GetUser failed: {}", status.message());
                UserError::from(status)
            })?;

        Ok(response.user.map(UserRecord::from))
    }

    /// 逐字段映射后创建用户，返回远程分配的 id
    pub async fn create_user(&self, user: User) -> Result<i64, UserError> {
        let request = CreateUserRequest {
            user: Some(user.into()),
        };

        let response = self.rpc.create_user(request).await.map_err(|status| {
            error!(code = ?status.code(), "CreateUser failed: {}", status.message());
            UserError::from(status)
        })?;

        Ok(response.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::user::model::Address;
    use crate::infrastructure::user_rpc::proto;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRpc {
        created: Mutex<Vec<CreateUserRequest>>,
        reads: Mutex<Vec<ReadUserRequest>>,
    }

    #[async_trait]
    impl UserRpc for RecordingRpc {
        async fn get_user(&self, request: ReadUserRequest) -> Result<ReadUserResponse, Status> {
            self.reads.lock().unwrap().push(request);
            Err(Status::not_found("no such user"))
        }

        async fn create_user(
            &self,
            request: CreateUserRequest,
        ) -> Result<CreateUserResponse, Status> {
            self.created.lock().unwrap().push(request);
            Ok(CreateUserResponse { id: 42 })
        }
    }

    #[tokio::test]
    async fn create_user_maps_fields_one_to_one() {
        let rpc = Arc::new(RecordingRpc::default());
        let adapter = UserAdapter::new(rpc.clone());

        let user = User {
            first_name: "Ann".to_string(),
            age: 30,
            address: Address {
                city: "X".to_string(),
                zip_code: "99".to_string(),
            },
        };
        let id = adapter.create_user(user).await.unwrap();
        assert_eq!(id, 42);

        let created = rpc.created.lock().unwrap();
        assert_eq!(
            created.as_slice(),
            &[CreateUserRequest {
                user: Some(proto::User {
                    firstname: "Ann".to_string(),
                    age: 30,
                    address: Some(proto::Address {
                        city: "X".to_string(),
                        zip_code: "99".to_string(),
                    }),
                }),
            }]
        );
    }

    #[tokio::test]
    async fn non_numeric_id_never_reaches_remote() {
        let rpc = Arc::new(RecordingRpc::default());
        let adapter = UserAdapter::new(rpc.clone());

        let err = adapter.fetch_user("abc").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidId(_)));
        assert!(rpc.reads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn remote_status_is_surfaced() {
        let rpc = Arc::new(RecordingRpc::default());
        let adapter = UserAdapter::new(rpc.clone());

        let err = adapter.fetch_user("7").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "rpc error: code = NotFound desc = no such user"
        );
        assert_eq!(rpc.reads.lock().unwrap()[0].id, 7);
    }
}
