//! CLIモジュール

use crate::builder::{local_now, RecordBuilder};
use crate::config::{CliArgs, Config};
use crate::output;
use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

/// 正常終了
pub const EXIT_SUCCESS: u8 = 0;
/// 使い方の誤り
pub const EXIT_USAGE: u8 = 1;

/// 引数不正時のメッセージ
pub const INVALID_MESSAGE: &str = "Invalid command or arguments";

/// コマンド未指定時の使い方
pub const USAGE: &str = "\
Usage:
  nest-update log <category> <minutes>
  nest-update progress <category> <value>

Examples:
  nest-update log quals 150
  nest-update progress quals 450";

/// Nest Update - 学習時間・進捗の更新レコードをJSONで出力
///
/// `--author`以外のオプションは持たない。コマンド名以降の引数は
/// `-`で始まるものも含めてそのまま`args`に入る。
#[derive(Parser, Debug)]
#[command(name = "nest-update")]
#[command(about = "学習時間・進捗の更新レコードをJSONで出力", long_about = None)]
#[command(
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// noteに記録する記録者名（コマンド名より前に指定）
    #[arg(long)]
    pub author: Option<String>,

    /// コマンド名と引数
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// 実行するコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum Commands {
    /// 学習時間を記録
    Log { category: String, minutes: i64 },
    /// 進捗値を更新
    Progress { category: String, value: i64 },
}

impl Commands {
    /// `<command> <category> <number>`の形だけを受け付ける
    ///
    /// カテゴリは検証しない。数値は10進のi64として解釈する。
    pub fn from_values(values: &[String]) -> Option<Self> {
        match values {
            [name, category, number] if name == "log" => {
                let minutes = number.parse().ok()?;
                Some(Commands::Log {
                    category: category.clone(),
                    minutes,
                })
            }
            [name, category, number] if name == "progress" => {
                let value = number.parse().ok()?;
                Some(Commands::Progress {
                    category: category.clone(),
                    value,
                })
            }
            _ => None,
        }
    }
}

/// 解釈済みの起動内容
#[derive(Debug, PartialEq)]
pub enum Invocation {
    /// コマンド未指定
    Usage,
    /// レコード生成
    Update { command: Commands, cli_args: CliArgs },
    /// 不明なコマンド、引数の過不足、数値として解釈できない値
    Invalid,
}

impl Invocation {
    /// 引数リストを解釈（先頭はプログラム名）
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match Cli::try_parse_from(args) {
            Ok(cli) => cli,
            Err(e) => {
                warn!("引数を解釈できません: {}", e.kind());
                debug!("{}", e);
                return Invocation::Invalid;
            }
        };

        if cli.args.is_empty() {
            return Invocation::Usage;
        }

        match Commands::from_values(&cli.args) {
            Some(command) => Invocation::Update {
                command,
                cli_args: CliArgs { author: cli.author },
            },
            None => {
                warn!("不正なコマンドまたは引数: {:?}", cli.args);
                Invocation::Invalid
            }
        }
    }
}

/// CLIエントリポイント
///
/// 終了ステータスを返す
pub fn run() -> Result<u8> {
    let invocation = Invocation::from_args(std::env::args_os());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(invocation, &Config::default_path(), &mut out)
}

/// 起動内容に応じて処理し、終了ステータスを返す
pub fn dispatch<W: Write>(invocation: Invocation, config_path: &Path, out: &mut W) -> Result<u8> {
    match invocation {
        Invocation::Usage => {
            writeln!(out, "{}", USAGE)?;
            Ok(EXIT_USAGE)
        }
        Invocation::Invalid => {
            writeln!(out, "{}", INVALID_MESSAGE)?;
            Ok(EXIT_USAGE)
        }
        Invocation::Update { command, cli_args } => {
            let config = Config::load_from(config_path, &cli_args)?;
            let builder = RecordBuilder::new(config.author, local_now);

            debug!("コマンドを実行します: {:?}", command);
            let record = match command {
                Commands::Log { category, minutes } => {
                    builder.add_time_log(out, &category, minutes)?
                }
                Commands::Progress { category, value } => {
                    builder.update_progress(out, &category, value)?
                }
            };

            output::write_record(out, &record)?;
            Ok(EXIT_SUCCESS)
        }
    }
}
