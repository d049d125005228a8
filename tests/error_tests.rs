//! 错误处理单元测试
//!
//! 测试应用错误类型的各种行为

use axum::http::StatusCode;
use booking_system::auth::jwt::TokenError;
use booking_system::error::{AppError, ErrorDetail, ErrorResponse};

// ==================== 错误状态码测试 ====================

#[test]
fn test_error_status_codes() {
    assert_eq!(
        AppError::CredentialMismatch.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        AppError::TokenInvalid(TokenError::BadSignature).status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(AppError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        AppError::BadRequest("invalid".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn test_database_error_status_code() {
    let db_error = sqlx::Error::RowNotFound;
    let app_error = AppError::Database(db_error);
    assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_config_error_status_code() {
    let app_error = AppError::Config("Invalid config".to_string());
    assert_eq!(app_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

// ==================== 用户消息测试 ====================

#[test]
fn test_credential_mismatch_message() {
    // 未知邮箱与密码错误共享同一条固定文案
    assert_eq!(
        AppError::CredentialMismatch.user_message(),
        "Incorrect email or password"
    );
}

#[test]
fn test_all_token_rejections_share_one_message() {
    let reasons = [
        TokenError::BadSignature,
        TokenError::MissingSubject,
        TokenError::Expired,
        TokenError::UnknownSubject,
    ];

    for reason in reasons {
        let error = AppError::TokenInvalid(reason);
        assert_eq!(error.user_message(), "Could not validate credentials");
        // 对外文案不得透露内部原因
        assert!(!error.user_message().contains("signature"));
        assert!(!error.user_message().contains("expired"));
        assert!(!error.user_message().contains("subject"));
    }
}

#[test]
fn test_user_messages_no_sensitive_info() {
    // 数据库错误不应该暴露技术细节
    let db_error = AppError::Database(sqlx::Error::RowNotFound);
    let message = db_error.user_message();
    assert_eq!(message, "Database error occurred");
    assert!(!message.to_lowercase().contains("sqlx"));
    assert!(!message.to_lowercase().contains("row"));
}

// ==================== 错误转换测试 ====================

#[test]
fn test_token_error_converts_to_app_error() {
    let app_error: AppError = TokenError::Expired.into();
    assert!(matches!(
        app_error,
        AppError::TokenInvalid(TokenError::Expired)
    ));
}

#[test]
fn test_config_error_conversion() {
    let app_error: AppError = config::ConfigError::Message("bad".to_string()).into();
    assert!(matches!(app_error, AppError::Config(_)));
}

// ==================== 错误响应序列化测试 ====================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: ErrorDetail {
            code: 401,
            message: "Could not validate credentials".to_string(),
            request_id: "req-123".to_string(),
        },
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["error"]["code"], 401);
    assert_eq!(json["error"]["message"], "Could not validate credentials");
    assert_eq!(json["error"]["request_id"], "req-123");
}
