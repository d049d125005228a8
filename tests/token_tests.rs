//! 会话令牌单元测试
//!
//! 测试令牌签发、校验顺序与各种拒绝原因

use booking_system::auth::jwt::{Claims, TokenError, TokenService, DEFAULT_TOKEN_TTL_SECS};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

mod common;

fn token_service() -> TokenService {
    TokenService::from_config(&common::create_test_config()).expect("valid test config")
}

/// 用任意密钥手工构造一个签名良好的令牌
fn sign_claims(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encoding should succeed")
}

#[test]
fn test_issue_and_decode_round_trip() {
    let service = token_service();

    let token = service.issue("a@x.com", Some(600)).unwrap();
    let claims = service.decode(&token).unwrap();

    assert_eq!(claims.sub.as_deref(), Some("a@x.com"));
    // 过期时间应该落在签发时刻之后
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_default_ttl_is_fifteen_minutes() {
    assert_eq!(DEFAULT_TOKEN_TTL_SECS, 900);

    let service = token_service();
    // 未指定 ttl 时使用默认值
    let token = service.issue("a@x.com", None).unwrap();
    let claims = service.decode(&token).unwrap();

    let remaining = claims.exp - Utc::now().timestamp();
    assert!(remaining > 890 && remaining <= 900);
}

#[test]
fn test_zero_ttl_token_is_immediately_expired() {
    let service = token_service();

    // ttl = 0：exp 等于当前时刻，now >= exp 即视为过期
    let token = service.issue("a@x.com", Some(0)).unwrap();
    assert_eq!(service.decode(&token), Err(TokenError::Expired));
}

#[test]
fn test_past_expiry_rejected() {
    let service = token_service();

    let claims = Claims {
        sub: Some("a@x.com".to_string()),
        exp: Utc::now().timestamp() - 3600,
    };
    let token = sign_claims(&claims, common::TEST_JWT_SECRET);

    assert_eq!(service.decode(&token), Err(TokenError::Expired));
}

#[test]
fn test_tampered_signature_is_rejected_not_a_crash() {
    let service = token_service();

    let mut token = service.issue("a@x.com", Some(600)).unwrap();
    let last = token.pop().unwrap();
    token.push(if last == 'A' { 'B' } else { 'A' });

    assert_eq!(service.decode(&token), Err(TokenError::BadSignature));
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let service = token_service();

    let claims = Claims {
        sub: Some("a@x.com".to_string()),
        exp: Utc::now().timestamp() + 600,
    };
    let token = sign_claims(&claims, "another_secret_key_32_characters!!");

    assert_eq!(service.decode(&token), Err(TokenError::BadSignature));
}

#[test]
fn test_missing_subject_rejected_before_expiry_check() {
    let service = token_service();

    // 签名正确、未过期，但没有主体声明
    let claims = Claims {
        sub: None,
        exp: Utc::now().timestamp() + 600,
    };
    let token = sign_claims(&claims, common::TEST_JWT_SECRET);

    assert_eq!(service.decode(&token), Err(TokenError::MissingSubject));
}

#[test]
fn test_missing_subject_reported_even_when_expired() {
    let service = token_service();

    // 主体检查先于过期检查
    let claims = Claims {
        sub: None,
        exp: Utc::now().timestamp() - 600,
    };
    let token = sign_claims(&claims, common::TEST_JWT_SECRET);

    assert_eq!(service.decode(&token), Err(TokenError::MissingSubject));
}

#[test]
fn test_garbage_tokens_rejected() {
    let service = token_service();

    for garbage in ["", "abc", "a.b", "a.b.c", "····"] {
        assert_eq!(
            service.decode(garbage),
            Err(TokenError::BadSignature),
            "garbage token {:?} should be rejected as a signature failure",
            garbage
        );
    }
}

#[test]
fn test_two_tokens_for_same_subject_are_independent() {
    let service = token_service();

    // 无单会话限制：同一主体可以同时持有多个有效令牌
    let token1 = service.issue("a@x.com", Some(600)).unwrap();
    let token2 = service.issue("a@x.com", Some(1200)).unwrap();

    assert!(service.decode(&token1).is_ok());
    assert!(service.decode(&token2).is_ok());
}
