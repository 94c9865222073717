//! パスワードハッシュ化と検証（bcrypt実装）
//!
//! 72バイトを超えるパスワードは切り詰めずに拒否する。

use auth_svc_common::error::AuthError;

/// パスワードハッシュ化のコスト
pub const HASH_COST: u32 = 10;

/// bcryptが扱えるパスワードの最大バイト長
pub const MAX_PASSWORD_BYTES: usize = 72;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 31;

/// bcryptパスワードハッシャー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher {
    /// 固定コスト（10）のハッシャーを作成
    pub fn new() -> Self {
        Self { cost: HASH_COST }
    }

    /// コストを指定して作成
    ///
    /// bcryptが受け付ける 4..=31 以外は `AuthError::Hashing`。
    pub fn with_cost(cost: u32) -> Result<Self, AuthError> {
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(AuthError::Hashing(format!(
                "Invalid bcrypt cost {} (expected {}..={})",
                cost, MIN_COST, MAX_COST
            )));
        }
        Ok(Self { cost })
    }

    /// コスト
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// パスワードをハッシュ化
    ///
    /// # Returns
    /// * `Ok(String)` - bcryptハッシュ文字列（$2b$で始まる）
    /// * `Err(AuthError::Hashing)` - ハッシュ化失敗（72バイト超など）
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::Hashing(format!(
                "Password is {} bytes (max {})",
                password.len(),
                MAX_PASSWORD_BYTES
            )));
        }
        bcrypt::hash(password, self.cost)
            .map_err(|e| AuthError::Hashing(format!("Failed to hash password: {}", e)))
    }

    /// パスワードを検証
    ///
    /// 一致した場合のみ `true`。不正なハッシュなど内部エラーはすべて `false`
    /// として扱い、呼び出し元には返さない。コストはハッシュ側の値を使う。
    /// 72バイト超のパスワードは照合せずに `false`。
    pub fn verify(&self, hash: &str, password: &str) -> bool {
        if password.len() > MAX_PASSWORD_BYTES {
            tracing::debug!(len = password.len(), "Password exceeds bcrypt limit");
            return false;
        }
        match bcrypt::verify(password, hash) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::debug!(error = %e, "Password verification failed closed");
                false
            }
        }
    }
}

/// パスワードをbcrypt（コスト10）でハッシュ化
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    PasswordHasher::new().hash(password)
}

/// パスワードをハッシュと照合
pub fn verify_password(hash: &str, password: &str) -> bool {
    PasswordHasher::new().verify(hash, password)
}
