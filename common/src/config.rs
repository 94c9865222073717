//! 設定管理
//!
//! AuthConfig（シークレットと有効期限）と、そこから構築するロール別シークレット

use crate::auth::UserRole;
use crate::error::{AuthError, CommonError, CommonResult};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 認証設定
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// 一般ユーザー用JWTシークレット
    pub user_jwt_secret: String,

    /// 管理者用JWTシークレット
    pub admin_jwt_secret: String,

    /// トークン有効期限（日）(デフォルト: 30)
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,
}

/// トークン有効期限の上限（日）
pub const MAX_TOKEN_TTL_DAYS: u32 = 3650;

fn default_token_ttl_days() -> u32 {
    30
}

impl AuthConfig {
    /// デフォルトの有効期限で設定を作成
    pub fn new(user_jwt_secret: impl Into<String>, admin_jwt_secret: impl Into<String>) -> Self {
        Self {
            user_jwt_secret: user_jwt_secret.into(),
            admin_jwt_secret: admin_jwt_secret.into(),
            token_ttl_days: default_token_ttl_days(),
        }
    }

    /// トークン有効期限
    pub fn token_ttl(&self) -> Duration {
        Duration::days(i64::from(self.token_ttl_days))
    }

    /// 設定値を検証
    pub fn validate(&self) -> CommonResult<()> {
        if self.token_ttl_days == 0 {
            return Err(CommonError::Validation(
                "token_ttl_days must be greater than 0".to_string(),
            ));
        }
        if self.token_ttl_days > MAX_TOKEN_TTL_DAYS {
            return Err(CommonError::Validation(format!(
                "token_ttl_days must be at most {}",
                MAX_TOKEN_TTL_DAYS
            )));
        }
        RoleSecrets::from_config(self).map(|_| ())
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("user_jwt_secret", &"<redacted>")
            .field("admin_jwt_secret", &"<redacted>")
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

/// ロール別署名シークレット
///
/// 起動時に一度だけ構築し、以降は読み取り専用。両ロールのシークレットは
/// 空でなく、互いに異なる。
#[derive(Clone)]
pub struct RoleSecrets {
    secrets: HashMap<UserRole, String>,
}

impl RoleSecrets {
    /// シークレットを検証して作成
    pub fn new(
        user_secret: impl Into<String>,
        admin_secret: impl Into<String>,
    ) -> CommonResult<Self> {
        let user_secret = user_secret.into();
        let admin_secret = admin_secret.into();

        for (role, secret) in [(UserRole::User, &user_secret), (UserRole::Admin, &admin_secret)] {
            if secret.trim().is_empty() {
                return Err(CommonError::Config(format!(
                    "{} JWT secret must not be empty",
                    role
                )));
            }
        }
        if user_secret == admin_secret {
            return Err(CommonError::Config(
                "user and admin JWT secrets must differ".to_string(),
            ));
        }

        let secrets = HashMap::from([
            (UserRole::User, user_secret),
            (UserRole::Admin, admin_secret),
        ]);
        Ok(Self { secrets })
    }

    /// AuthConfigから作成
    pub fn from_config(config: &AuthConfig) -> CommonResult<Self> {
        Self::new(
            config.user_jwt_secret.clone(),
            config.admin_jwt_secret.clone(),
        )
    }

    /// ロールのシークレット
    pub fn get(&self, role: UserRole) -> Option<&[u8]> {
        self.secrets.get(&role).map(|s| s.as_bytes())
    }

    /// ロール文字列を解決してシークレットを取得
    ///
    /// 未知のロールは `AuthError::InvalidRole`。
    pub fn resolve(&self, role: &str) -> Result<(UserRole, &[u8]), AuthError> {
        let role: UserRole = role.parse()?;
        let secret = self
            .get(role)
            .ok_or_else(|| AuthError::InvalidRole(role.to_string()))?;
        Ok((role, secret))
    }
}

impl fmt::Debug for RoleSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut roles: Vec<&str> = self.secrets.keys().map(UserRole::as_str).collect();
        roles.sort_unstable();
        f.debug_struct("RoleSecrets").field("roles", &roles).finish()
    }
}
