//! Session token issuance and validation
//!
//! Tokens are stateless HS256 JWTs carrying only a subject (the user's
//! email) and an absolute expiry. There is no revocation list: a token
//! stops being honored when it expires or its subject disappears.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{config::AppConfig, error::AppError};

/// Default token lifetime when the caller does not request one
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 900;

/// Token claims: subject and absolute expiry only
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user email)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration (unix seconds)
    pub exp: i64,
}

/// Why a token was rejected. Internal diagnostics only; every variant is
/// presented to the client as the same generic unauthorized response.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("signature verification failed")]
    BadSignature,

    #[error("no subject claim")]
    MissingSubject,

    #[error("expired")]
    Expired,

    #[error("subject does not exist")]
    UnknownSubject,
}

/// Signs and validates session tokens with the server secret
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_exp_secs: u64,
}

impl TokenService {
    /// Create token service from config
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let secret = config.security.jwt_secret.expose_secret();

        // Ensure secret is at least 32 bytes for HS256
        if secret.len() < 32 {
            return Err(AppError::Config(
                "JWT secret too short (min 32 chars)".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_exp_secs: config.security.access_token_exp_secs,
        })
    }

    /// Issue a token for `subject`. An unspecified ttl falls back to the
    /// 15-minute default; the login path requests the configured
    /// access-token lifetime instead.
    pub fn issue(&self, subject: &str, ttl_secs: Option<u64>) -> Result<String, AppError> {
        let ttl_secs = ttl_secs.unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: Utc::now().timestamp() + ttl_secs as i64,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode token: {:?}", e);
            AppError::Internal
        })
    }

    /// Issue a login token with the configured access-token lifetime
    pub fn issue_access_token(&self, subject: &str) -> Result<String, AppError> {
        self.issue(subject, Some(self.access_token_exp_secs))
    }

    /// Verify signature and claims, in order: signature, subject presence,
    /// expiry. The expiry comparison happens here with zero leeway (a token
    /// is valid strictly before its expiry timestamp) instead of going
    /// through the jsonwebtoken built-in check and its default 60 s leeway.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| {
                tracing::debug!("Token decode failed: {:?}", e);
                TokenError::BadSignature
            })?
            .claims;

        if claims.sub.is_none() {
            return Err(TokenError::MissingSubject);
        }

        if Utc::now().timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AppConfig, DatabaseConfig, LoggingConfig, MailConfig, SecurityConfig, ServerConfig,
    };
    use secrecy::Secret;

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                addr: "127.0.0.1:8000".to_string(),
                graceful_shutdown_timeout_secs: 30,
                cors_origin: None,
            },
            database: DatabaseConfig {
                url: Secret::new("postgresql://localhost/test".to_string()),
                max_connections: 10,
                min_connections: 1,
                acquire_timeout_secs: 30,
                idle_timeout_secs: 600,
                max_lifetime_secs: 1800,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
            },
            security: SecurityConfig {
                jwt_secret: Secret::new("test_secret_key_32_characters_long!".to_string()),
                access_token_exp_secs: 1800,
                generated_password_length: 8,
            },
            mail: MailConfig {
                smtp_server: None,
                smtp_port: 587,
                smtp_username: "".to_string(),
                smtp_password: Secret::new("".to_string()),
                front_url: "http://localhost:3000".to_string(),
            },
        }
    }

    #[test]
    fn test_issue_and_decode() {
        let service = TokenService::from_config(&test_config()).unwrap();

        let token = service.issue("a@x.com", Some(600)).unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.sub.as_deref(), Some("a@x.com"));
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_zero_ttl_token_is_expired() {
        let service = TokenService::from_config(&test_config()).unwrap();

        let token = service.issue("a@x.com", Some(0)).unwrap();
        assert_eq!(service.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = TokenService::from_config(&test_config()).unwrap();

        let mut token = service.issue("a@x.com", Some(600)).unwrap();
        // Flip the last signature byte
        let last = token.pop().unwrap();
        token.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(service.decode(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::from_config(&test_config()).unwrap();
        assert_eq!(service.decode("not.a.token"), Err(TokenError::BadSignature));
        assert_eq!(service.decode(""), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_missing_subject_rejected() {
        let service = TokenService::from_config(&test_config()).unwrap();

        // Well-signed token without a subject claim
        let claims = Claims {
            sub: None,
            exp: Utc::now().timestamp() + 600,
        };
        let secret = "test_secret_key_32_characters_long!";
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(service.decode(&token), Err(TokenError::MissingSubject));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = TokenService::from_config(&test_config()).unwrap();

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

        assert_eq!(service.decode(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_short_secret_is_config_error() {
        let mut config = test_config();
        config.security.jwt_secret = Secret::new("short".to_string());

        assert!(matches!(
            TokenService::from_config(&config),
            Err(AppError::Config(_))
        ));
    }
}
