//! auth-svc credential core
//!
//! ログイン識別子の分類、パスワードのハッシュ化・検証、ロール別シークレットで
//! 署名したセッショントークンの発行・検証を提供

#![warn(missing_docs)]

use auth_svc_common::auth::LoginMethod;
use auth_svc_common::config::{AuthConfig, RoleSecrets};
use auth_svc_common::error::CommonResult;
use chrono::Duration;
use std::sync::Arc;

/// 認証機能（パスワード、ログイン方式、JWT）
pub mod auth;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロール別シークレットの読み込み
pub mod secrets;

/// ロギング初期化ユーティリティ
pub mod logging;

use auth::jwt::{TokenIssuer, TokenValidator};
use auth::password::PasswordHasher;

/// 認証状態
///
/// 同じ `RoleSecrets` を共有するハッシャー、発行、検証の組。
#[derive(Debug, Clone)]
pub struct AuthState {
    /// パスワードハッシャー
    pub hasher: PasswordHasher,
    /// トークン発行
    pub issuer: TokenIssuer,
    /// トークン検証
    pub validator: TokenValidator,
}

impl AuthState {
    /// シークレットと有効期限から作成
    pub fn new(secrets: Arc<RoleSecrets>, token_ttl: Duration) -> Self {
        Self {
            hasher: PasswordHasher::new(),
            issuer: TokenIssuer::with_ttl(secrets.clone(), token_ttl),
            validator: TokenValidator::new(secrets),
        }
    }

    /// 設定を検証して作成
    pub fn from_config(config: &AuthConfig) -> CommonResult<Self> {
        config.validate()?;
        let secrets = Arc::new(RoleSecrets::from_config(config)?);
        Ok(Self::new(secrets, config.token_ttl()))
    }

    /// 環境変数から作成
    pub fn from_env() -> CommonResult<Self> {
        Self::from_config(&secrets::load_config_from_env()?)
    }

    /// ログイン識別子の種類を判定
    pub fn classify(&self, input: &str) -> LoginMethod {
        auth::login::classify_login(input)
    }
}
