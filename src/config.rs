//! 設定モジュール

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// noteに記録する既定の記録者名
pub const DEFAULT_AUTHOR: &str = "Sonya";

/// アプリケーション設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// noteに埋め込む記録者名
    pub author: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.to_string(),
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    author: Option<String>,
}

/// CLI引数
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CliArgs {
    pub author: Option<String>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    /// ファイルが存在しない場合はデフォルト値を使う
    pub fn load_from(path: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if path.exists() {
            debug!("設定ファイルを読み込みます: {}", path.display());
            let content = fs::read_to_string(path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        config.merge_cli_args(cli_args);

        Ok(config)
    }

    /// 設定ファイルのパスを取得
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".nest-update").join("config.toml")
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(ref author) = file_config.author {
            self.author = author.clone();
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(ref author) = cli_args.author {
            self.author = author.clone();
        }
    }
}
