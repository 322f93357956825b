//! 更新レコードモジュール

use chrono::NaiveDateTime;
use serde::Serialize;

/// 連携先アプリへ渡す更新レコード
///
/// JSONでは`type`タグの後にフィールドが宣言順に並ぶ。
/// `timestamp`はタイムゾーンなしのISO-8601文字列になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum UpdateRecord {
    /// 学習時間ログ
    #[serde(rename = "timeLog")]
    TimeLog {
        category: String,
        minutes: i64,
        timestamp: NaiveDateTime,
        note: String,
    },
    /// 進捗値の更新
    #[serde(rename = "progress")]
    Progress {
        category: String,
        value: i64,
        timestamp: NaiveDateTime,
        note: String,
    },
}

impl UpdateRecord {
    /// 学習時間ログを作成
    pub fn time_log(author: &str, category: &str, minutes: i64, timestamp: NaiveDateTime) -> Self {
        UpdateRecord::TimeLog {
            category: category.to_string(),
            minutes,
            timestamp,
            note: format!("{} logged {} minutes of {} study", author, minutes, category),
        }
    }

    /// 進捗更新を作成
    pub fn progress(author: &str, category: &str, value: i64, timestamp: NaiveDateTime) -> Self {
        UpdateRecord::Progress {
            category: category.to_string(),
            value,
            timestamp,
            note: format!("{} updated {} progress to {}", author, category, value),
        }
    }

    pub fn category(&self) -> &str {
        match self {
            UpdateRecord::TimeLog { category, .. } | UpdateRecord::Progress { category, .. } => {
                category
            }
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        match self {
            UpdateRecord::TimeLog { timestamp, .. } | UpdateRecord::Progress { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// 人間向けの受付メッセージ
    pub fn confirmation(&self) -> String {
        match self {
            UpdateRecord::TimeLog {
                category, minutes, ..
            } => format!("✅ Queued: {} minutes of {}", minutes, category),
            UpdateRecord::Progress {
                category, value, ..
            } => format!("✅ Queued: {} progress = {}", category, value),
        }
    }
}
