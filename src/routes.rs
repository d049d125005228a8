//! 路由注册
//! 创建所有 API 路由并应用中间件

use axum::{
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::{Any, CorsLayer}, limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{handlers, middleware::AppState};

/// 请求体大小上限（1 MiB）
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// 创建应用路由
pub fn create_router(state: Arc<AppState>) -> Router {
    // 公开端点（健康检查）
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check));

    // 认证路由（无需令牌）
    let auth_routes = Router::new().route("/api/v1/auth/login", post(handlers::auth::login));

    // 需要认证的路由
    let authenticated_routes = Router::new()
        // 当前用户信息
        .route("/api/v1/auth/me", get(handlers::auth::get_current_user))

        // 用户管理
        .route(
            "/api/v1/users",
            get(handlers::user::list_users).post(handlers::user::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/api/v1/users/me/password", put(handlers::user::change_password))

        // 事件
        .route(
            "/api/v1/events",
            get(handlers::event::list_events).post(handlers::event::create_event),
        )
        .route(
            "/api/v1/events/{id}",
            get(handlers::event::get_event)
                .put(handlers::event::update_event)
                .delete(handlers::event::delete_event),
        )

        // 分组
        .route(
            "/api/v1/groups",
            get(handlers::group::list_groups).post(handlers::group::create_group),
        )
        .route(
            "/api/v1/groups/{id}",
            get(handlers::group::get_group)
                .put(handlers::group::update_group)
                .delete(handlers::group::delete_group),
        )

        // 房间
        .route(
            "/api/v1/rooms",
            get(handlers::room::list_rooms).post(handlers::room::create_room),
        )
        .route(
            "/api/v1/rooms/{id}",
            get(handlers::room::get_room)
                .put(handlers::room::update_room)
                .delete(handlers::room::delete_room),
        )

        // 状态
        .route(
            "/api/v1/statuses",
            get(handlers::status::list_statuses).post(handlers::status::create_status),
        )
        .route(
            "/api/v1/statuses/{id}",
            get(handlers::status::get_status)
                .put(handlers::status::update_status)
                .delete(handlers::status::delete_status),
        )

        // 通知
        .route(
            "/api/v1/notifications",
            get(handlers::notification::list_notifications)
                .post(handlers::notification::create_notification),
        )
        .route(
            "/api/v1/notifications/{id}",
            get(handlers::notification::get_notification)
                .put(handlers::notification::update_notification)
                .delete(handlers::notification::delete_notification),
        )

        // 参与者
        .route(
            "/api/v1/participants",
            get(handlers::participant::list_participants)
                .post(handlers::participant::create_participant),
        )
        .route(
            "/api/v1/participants/{id}",
            get(handlers::participant::get_participant)
                .delete(handlers::participant::delete_participant),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::auth::middleware::auth_middleware,
        ));

    // 组合所有路由
    let mut router = Router::new()
        .merge(public_routes)
        .merge(auth_routes)
        .merge(authenticated_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(axum::middleware::from_fn(
            crate::middleware::request_tracking_middleware,
        ));

    // 跨域：仅在配置了前端来源时开启
    if let Some(origin) = &state.config.server.cors_origin {
        if let Ok(origin) = origin.parse::<HeaderValue>() {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        } else {
            tracing::warn!(origin = %origin, "Invalid CORS origin, skipping CORS layer");
        }
    }

    router.with_state(state)
}
