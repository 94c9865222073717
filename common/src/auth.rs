//! 認証関連のデータモデル
//!
//! ロール、JWTクレーム、ログイン方式の定義

use crate::error::AuthError;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// トークン発行者（`iss` クレームの固定値）
pub const TOKEN_ISSUER: &str = "auth-svc";

/// ユーザーロール
///
/// ロールごとに署名シークレットが異なる。文字列表現は小文字のみ受け付ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 一般ユーザー
    User,
    /// 管理者
    Admin,
}

impl UserRole {
    /// すべてのロール
    pub const ALL: [UserRole; 2] = [UserRole::User, UserRole::Admin];

    /// ロール名（`"user"` / `"admin"`）
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(AuthError::InvalidRole(other.to_string())),
        }
    }
}

/// JWTクレーム
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// ユーザーID
    pub sub: String,
    /// 発行時のロール
    pub role: UserRole,
    /// 発行者
    pub iss: String,
    /// 有効期限（Unix timestamp, UTC秒）
    pub exp: i64,
}

impl Claims {
    /// 固定の発行者でクレームを作成
    pub fn new(user_id: impl Into<String>, role: UserRole, exp: i64) -> Self {
        Self {
            sub: user_id.into(),
            role,
            iss: TOKEN_ISSUER.to_string(),
            exp,
        }
    }

    /// ユーザーID
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// ロール
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// 発行者
    pub fn issuer(&self) -> &str {
        &self.iss
    }

    /// 有効期限（表現できないタイムスタンプの場合は `None`）
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// 現在時刻が有効期限を過ぎているか
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// ログイン方式（ログイン識別子の種類）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    /// メールアドレス
    Email,
    /// 電話番号
    Phone,
    /// ユーザー名
    Username,
}

impl LoginMethod {
    /// 方式名（`"email"` / `"phone"` / `"username"`）
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginMethod::Email => "email",
            LoginMethod::Phone => "phone",
            LoginMethod::Username => "username",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
