// 認証モジュール

/// パスワードハッシュ化・検証（bcrypt）
pub mod password;

/// ログイン識別子の分類
pub mod login;

/// JWT生成・検証（jsonwebtoken）
pub mod jwt;
