//! ロギング初期化ユーティリティ
//!
//! `tracing` による構造化ロギングを標準出力へ出力する。
//! `AUTH_SVC_LOG_DIR` が設定されている場合は、日次ローテーションの
//! JSONライン形式ファイルにも出力する。

use std::{
    env, fs,
    io::{self, Error},
    path::PathBuf,
    sync::OnceLock,
};
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログファイル名の接頭辞（JSON Lines）
pub const LOG_FILE_PREFIX: &str = "auth-svc.jsonl";

const LOG_DIR_ENV: &str = "AUTH_SVC_LOG_DIR";
const LOG_LEVEL_ENV: &str = "AUTH_SVC_LOG_LEVEL";
// レガシー環境変数（非推奨）
const LEGACY_LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const ALT_LEVEL_ENV: &str = "RUST_LOG";
const DEFAULT_LEVEL: &str = "info";

static LOGGER_GUARD: OnceLock<Result<LoggerGuard, io::Error>> = OnceLock::new();

struct LoggerGuard {
    _file_guard: Option<WorkerGuard>,
}

/// ログ出力を初期化する。
///
/// 2回目以降の呼び出しは何もせず、初回の結果を返す。
pub fn init() -> io::Result<()> {
    match LOGGER_GUARD.get_or_init(configure_logger) {
        Ok(_) => Ok(()),
        Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
    }
}

/// ファイル出力先のディレクトリ（未設定なら `None`）
pub fn log_dir() -> Option<PathBuf> {
    env::var_os(LOG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

// 優先順位: AUTH_SVC_LOG_LEVEL > LOG_LEVEL > RUST_LOG > info
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_env(LEGACY_LOG_LEVEL_ENV))
        .or_else(|_| EnvFilter::try_from_env(ALT_LEVEL_ENV))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

fn configure_logger() -> io::Result<LoggerGuard> {
    let (file_layer, file_guard) = match log_dir() {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(&dir)
                .map_err(Error::other)?;
            let (writer, guard) = non_blocking(appender);

            // ファイル出力レイヤー（JSON形式）
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // 標準出力レイヤー（人間が読みやすい形式）
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(Error::other)?;

    tracing::info!(
        category = "system",
        file_output = file_guard.is_some(),
        "auth-svc logging initialized"
    );

    Ok(LoggerGuard {
        _file_guard: file_guard,
    })
}
