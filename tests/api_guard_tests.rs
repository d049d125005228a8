//! 请求守卫集成测试
//!
//! 通过 oneshot 驱动完整路由。守卫在访问数据库之前就拒绝缺失、
//! 畸形或过期的令牌，因此这些测试不需要真实数据库。

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, EncodingKey, Header};
use tower::ServiceExt;

use booking_system::auth::jwt::Claims;
use booking_system::routes::create_router;

mod common;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_is_public() {
    let app = create_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let app = create_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // 401 必须携带 Bearer 质询头
    assert_eq!(
        response
            .headers()
            .get(header::WWW_AUTHENTICATE)
            .and_then(|v| v.to_str().ok()),
        Some("Bearer")
    );

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    let app = create_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/me")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // 畸形令牌是普通的 401，不是服务器错误
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_protected_route_with_wrong_scheme() {
    let app = create_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/me")
                .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let state = common::create_test_state();
    let app = create_router(state.clone());

    // 过去时刻过期的令牌：守卫在解析时判定过期，不触发数据库查询
    let token = state.token_service.issue("a@x.com", Some(0)).unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_protected_route_with_foreign_signature() {
    let app = create_router(common::create_test_state());

    // 用别的密钥签出的令牌
    let claims = Claims {
        sub: Some("a@x.com".to_string()),
        exp: Utc::now().timestamp() + 600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"another_secret_key_32_characters!!"),
    )
    .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/me")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_router(common::create_test_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
