//! JWT生成と検証（jsonwebtoken実装）
//!
//! HS256のみを使い、ロールごとに異なるシークレットで署名・検証する。
//! 検証時は呼び出し元が指定したロールのシークレットを使うため、
//! 別ロール用に発行されたトークンは署名不一致で拒否される。

use auth_svc_common::auth::{Claims, UserRole, TOKEN_ISSUER};
use auth_svc_common::config::RoleSecrets;
use auth_svc_common::error::AuthError;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

/// JWT有効期限（30日）
pub const JWT_EXPIRATION_DAYS: i64 = 30;

/// JWTトークンを生成（有効期限は発行から30日）
///
/// # Arguments
/// * `user_id` - ユーザーID
/// * `role` - ユーザーロール
/// * `secret` - ロールに対応するシークレット
///
/// # Returns
/// * `Ok(String)` - JWTトークン（3つのドット区切り部分）
/// * `Err(AuthError::Signing)` - 生成失敗
pub fn create_jwt(user_id: &str, role: UserRole, secret: &[u8]) -> Result<String, AuthError> {
    let expires_at = expiration_after(Duration::days(JWT_EXPIRATION_DAYS))?;
    create_jwt_with_expiration(user_id, role, secret, expires_at)
}

/// 有効期限（Unix timestamp）を指定してJWTトークンを生成
pub fn create_jwt_with_expiration(
    user_id: &str,
    role: UserRole,
    secret: &[u8],
    expires_at: i64,
) -> Result<String, AuthError> {
    let claims = Claims::new(user_id, role, expires_at);

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Signing(format!("Failed to create JWT: {}", e)))
}

/// JWTトークンを検証
///
/// # Returns
/// * `Ok(Claims)` - 検証済みクレーム
/// * `Err(AuthError::InvalidSignature)` - 署名不一致、またはHS256以外
/// * `Err(AuthError::TokenExpired)` - 有効期限切れ（猶予なし）
/// * `Err(AuthError::InvalidIssuer)` - 発行者が異なる
/// * `Err(AuthError::ClaimDecoding)` - トークン形式・クレームが不正
pub fn verify_jwt(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation())
        .map(|data| data.claims)
        .map_err(map_jwt_error)
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_issuer(&[TOKEN_ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation
}

fn expiration_after(ttl: Duration) -> Result<i64, AuthError> {
    Utc::now()
        .checked_add_signed(ttl)
        .map(|t| t.timestamp())
        .ok_or_else(|| AuthError::Signing("Failed to calculate expiration time".to_string()))
}

fn map_jwt_error(err: jsonwebtoken::errors::Error) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        ErrorKind::InvalidIssuer => AuthError::InvalidIssuer,
        ErrorKind::MissingRequiredClaim(claim) => {
            AuthError::ClaimDecoding(format!("Missing required claim: {}", claim))
        }
        ErrorKind::InvalidToken => AuthError::ClaimDecoding("Malformed token".to_string()),
        ErrorKind::Base64(_) => AuthError::ClaimDecoding("Invalid base64 encoding".to_string()),
        ErrorKind::Json(e) => AuthError::ClaimDecoding(format!("Invalid claims: {}", e)),
        _ => AuthError::ClaimDecoding(format!("Failed to verify JWT: {}", err)),
    }
}

/// セッショントークン発行
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    secrets: Arc<RoleSecrets>,
    ttl: Duration,
}

impl TokenIssuer {
    /// 有効期限30日で作成
    pub fn new(secrets: Arc<RoleSecrets>) -> Self {
        Self::with_ttl(secrets, Duration::days(JWT_EXPIRATION_DAYS))
    }

    /// 有効期限を指定して作成
    pub fn with_ttl(secrets: Arc<RoleSecrets>, ttl: Duration) -> Self {
        Self { secrets, ttl }
    }

    /// 有効期限
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// ユーザーIDとロール名からトークンを発行
    ///
    /// ロールの解決は署名より先に行う。未知のロールは `AuthError::InvalidRole`。
    pub fn issue(&self, user_id: &str, role: &str) -> Result<String, AuthError> {
        let (role, secret) = self.secrets.resolve(role)?;
        let expires_at = expiration_after(self.ttl)?;
        let token = create_jwt_with_expiration(user_id, role, secret, expires_at)?;

        tracing::debug!(user_id, role = %role, expires_at, "Issued session token");
        Ok(token)
    }
}

/// セッショントークン検証
#[derive(Debug, Clone)]
pub struct TokenValidator {
    secrets: Arc<RoleSecrets>,
}

impl TokenValidator {
    /// 作成
    pub fn new(secrets: Arc<RoleSecrets>) -> Self {
        Self { secrets }
    }

    /// 呼び出し元が指定したロールのシークレットでトークンを検証
    ///
    /// ロールの解決は暗号処理より先に行う。署名・有効期限・発行者の検証に
    /// 加えて、トークン内のロールが指定ロールと一致することを確認する。
    pub fn validate(&self, token: &str, role: &str) -> Result<Claims, AuthError> {
        let (role, secret) = self.secrets.resolve(role)?;

        let claims = verify_jwt(token, secret).map_err(|e| {
            tracing::debug!(role = %role, error = %e, "Session token rejected");
            e
        })?;

        if claims.role != role {
            tracing::warn!(expected = %role, actual = %claims.role, "Session token role mismatch");
            return Err(AuthError::RoleMismatch {
                expected: role,
                actual: claims.role,
            });
        }

        Ok(claims)
    }
}
