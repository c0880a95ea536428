//! 路由分发

use axum::{
    http::StatusCode,
    middleware,
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app::{self, person, user, AppState};
use crate::core::middleware::request_logging_middleware;

/// 创建路由；每个处理器都经过日志与计时中间件
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hello", any(app::hello))
        // 按前缀分发：POST 忽略前缀后的剩余路径，GET 用剩余路径查询（可包含 `/`）
        .route(
            "/person/",
            get(person::handler::list_persons).post(person::handler::add_person),
        )
        .route(
            "/person/*name",
            get(person::handler::get_person).post(person::handler::add_person),
        )
        // GET /users/ 没有 id，显式返回 404
        .route("/users/", post(user::handler::add_user).get(not_found))
        .route(
            "/users/*id",
            get(user::handler::get_user).post(user::handler::add_user),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found\n")
}
