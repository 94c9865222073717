//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use crate::auth::UserRole;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Authentication error type
///
/// Every variant is a recoverable per-call failure. Password verification is
/// the one operation that never surfaces these; it reports `false` instead.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Role string is neither `user` nor `admin`
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Password hashing failed
    #[error("Password hash error: {0}")]
    Hashing(String),

    /// Token signing failed
    #[error("Token signing error: {0}")]
    Signing(String),

    /// Token signature does not match the role secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token expiration is in the past
    #[error("Token has expired")]
    TokenExpired,

    /// Token or its payload could not be decoded into claims
    #[error("Claim decoding error: {0}")]
    ClaimDecoding(String),

    /// Token was not issued by this service
    #[error("Invalid token issuer")]
    InvalidIssuer,

    /// Token was issued for another role
    #[error("Token role mismatch: expected {expected}, found {actual}")]
    RoleMismatch {
        /// Role asserted by the caller
        expected: UserRole,
        /// Role carried in the token
        actual: UserRole,
    },
}

impl AuthError {
    /// Whether this error reports an expired token.
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }

    /// Whether this error reports a signature mismatch.
    pub fn is_signature_error(&self) -> bool {
        matches!(self, AuthError::InvalidSignature)
    }

    /// Whether this error came out of token validation.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidSignature
                | AuthError::TokenExpired
                | AuthError::ClaimDecoding(_)
                | AuthError::InvalidIssuer
                | AuthError::RoleMismatch { .. }
        )
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Auth)
pub type AuthResult<T> = Result<T, AuthError>;
