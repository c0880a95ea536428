//! 远程用户服务的 gRPC 客户端
//!
//! 消息类型与客户端由 `build.rs` 从 `proto/user.proto` 生成。

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::Status;
use tracing::info;

use crate::app::user::service::UserRpc;

/// 生成的 protobuf 类型
pub mod proto {
    tonic::include_proto!("proto");
}

use proto::user_service_client::UserServiceClient;
use proto::{CreateUserRequest, CreateUserResponse, ReadUserRequest, ReadUserResponse};

pub const SERVICE_NAME: &str = "proto.UserService";

/// UserService 客户端，持有一条长连接
#[derive(Debug, Clone)]
pub struct GrpcUserClient {
    inner: UserServiceClient<Channel>,
}

impl GrpcUserClient {
    /// 建立到远程服务的通道（惰性连接，首次调用时才真正拨号）
    pub fn connect_lazy(addr: &str) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(addr.to_string())?.connect_lazy();
        info!(service = SERVICE_NAME, %addr, "user service channel created");
        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        Self {
            inner: UserServiceClient::new(channel),
        }
    }
}

#[async_trait]
impl UserRpc for GrpcUserClient {
    async fn get_user(&self, request: ReadUserRequest) -> Result<ReadUserResponse, Status> {
        // 通道克隆开销很小，共享同一条连接
        let mut client = self.inner.clone();
        let response = client.get_user(request).await?;
        Ok(response.into_inner())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Status> {
        let mut client = self.inner.clone();
        let response = client.create_user(request).await?;
        Ok(response.into_inner())
    }
}
