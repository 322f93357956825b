//! レコード生成モジュール

use crate::record::UpdateRecord;
use chrono::{Local, NaiveDateTime, SubsecRound};
use std::io::{self, Write};
use tracing::debug;

/// 現在時刻を返す関数
pub type Clock = fn() -> NaiveDateTime;

/// ローカル時刻（マイクロ秒精度、タイムゾーンなし）
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// 更新レコードの生成
///
/// レコードを返す前に受付メッセージを1行書き出す
pub struct RecordBuilder {
    author: String,
    clock: Clock,
}

impl RecordBuilder {
    /// 新しいRecordBuilderを作成
    pub fn new(author: impl Into<String>, clock: Clock) -> Self {
        Self {
            author: author.into(),
            clock,
        }
    }

    /// 学習時間ログを生成
    pub fn add_time_log<W: Write>(
        &self,
        out: &mut W,
        category: &str,
        minutes: i64,
    ) -> io::Result<UpdateRecord> {
        let record = UpdateRecord::time_log(&self.author, category, minutes, (self.clock)());
        self.announce(out, &record)?;
        Ok(record)
    }

    /// 進捗更新を生成
    pub fn update_progress<W: Write>(
        &self,
        out: &mut W,
        category: &str,
        value: i64,
    ) -> io::Result<UpdateRecord> {
        let record = UpdateRecord::progress(&self.author, category, value, (self.clock)());
        self.announce(out, &record)?;
        Ok(record)
    }

    fn announce<W: Write>(&self, out: &mut W, record: &UpdateRecord) -> io::Result<()> {
        debug!(
            "レコードを生成しました: category={} timestamp={}",
            record.category(),
            record.timestamp()
        );
        writeln!(out, "{}", record.confirmation())
    }
}
