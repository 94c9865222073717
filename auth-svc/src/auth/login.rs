//! ログイン識別子の分類
//!
//! 判定順序は メール → 電話番号 → ユーザー名 の固定。

use auth_svc_common::auth::LoginMethod;

/// メールとして扱う末尾
pub const EMAIL_SUFFIX: &str = "@gmail.com";

/// ログイン識別子の種類を判定
///
/// 1. 末尾10バイトが `@gmail.com` かつ全体が10バイトより長い → `Email`
/// 2. 全体が整数として解釈できる → `Phone`（桁数は問わない）
/// 3. それ以外 → `Username`
///
/// 全入力に対して定義される純粋関数。ログ出力は結果に影響しない。
pub fn classify_login(input: &str) -> LoginMethod {
    let method = if input.len() > EMAIL_SUFFIX.len() && input.ends_with(EMAIL_SUFFIX) {
        LoginMethod::Email
    } else if is_integer(input) {
        LoginMethod::Phone
    } else {
        LoginMethod::Username
    };

    tracing::debug!(method = %method, len = input.len(), "Classified login identifier");
    method
}

// 先頭の符号1つと、1桁以上のASCII数字のみ
fn is_integer(input: &str) -> bool {
    let digits = input
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(input);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
