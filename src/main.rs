use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use person_gateway::{
    app::{person::PgPersonStore, AppState},
    config::load_config,
    create_router,
    infrastructure::{DatabaseManager, Logger, GrpcUserClient},
    lifecycle::shutdown_signal,
};

#[derive(Debug, Parser)]
#[command(name = "person-gateway", about = "REST gateway for persons and users")]
struct Cli {
    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 远程用户服务地址
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref()).context("can't load configuration")?;
    if let Some(addr) = cli.addr {
        config.user_service.addr = addr;
        config.validate().context("invalid --addr")?;
    }

    Logger::init(&config.logging.level);

    let database = DatabaseManager::new(&config.database)
        .await
        .map_err(|e| {
            error!("Failed to initialize database: {}", e);
            e
        })
        .context("can't connect to database")?;

    let user_client = GrpcUserClient::connect_lazy(&config.user_service.addr)
        .context("did not connect to user service")?;

    let state = AppState::new(
        Arc::new(PgPersonStore::new(database.get_pool().clone())),
        Arc::new(user_client),
    );
    let app = create_router(state);

    let listener = TcpListener::bind(config.http.socket_addr())
        .await
        .with_context(|| format!("can't bind {}", config.http.socket_addr()))?;
    info!("🚀 person-gateway listening on http://{}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // 路由与其中的 gRPC 通道此时已释放，再关闭连接池
    database.close().await;
    info!("user service channel released");

    served.context("server error")
}
