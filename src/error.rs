//! エラー型定義モジュール

use std::io;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// 出力エラー
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("JSONシリアライズエラー: {0}")]
    SerializeError(#[from] serde_json::Error),

    #[error("書き込みエラー: {0}")]
    WriteError(#[from] io::Error),
}
