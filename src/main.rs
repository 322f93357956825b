//! Nest Update - 学習時間・進捗の更新レコードをJSONで出力するCLI

mod builder;
mod cli;
mod config;
mod error;
mod logging;
mod output;
mod record;

use anyhow::Result;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    logging::init();
    let status = cli::run()?;
    Ok(ExitCode::from(status))
}
