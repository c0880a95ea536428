//! 核心中间件模块

use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::info;
use uuid::Uuid;

/// 请求日志与计时中间件
///
/// 分发前记录方法和路径，分发后记录耗时（微秒），无论结果如何。
/// 成功响应统一声明 JSON 内容类型；错误响应保留纯文本类型。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let uri = req.uri().clone();

    info!(%request_id, "Request {} {}", method, uri);

    let mut response = next.run(req).await;
    if response.status().is_success() {
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
    }

    let elapsed = start.elapsed().as_micros();
    info!(
        %request_id,
        status = response.status().as_u16(),
        "Response time {} μs",
        elapsed
    );

    response
}
