//! auth-svc Common Library
//!
//! 認証コアで共有するデータモデル、エラー型、設定構造体を提供

#![warn(missing_docs)]

/// 認証データモデル（ロール、クレーム、ログイン方式）
pub mod auth;

/// 設定管理（ロール別シークレット）
pub mod config;

/// エラー型定義
pub mod error;
