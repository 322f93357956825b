//! JSON出力モジュール

use crate::error::OutputError;
use crate::record::UpdateRecord;
use std::io::Write;

/// レコードを2スペースインデントのJSON文字列に変換
pub fn to_json(record: &UpdateRecord) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(record)?)
}

/// レコードをJSONとして書き出す
pub fn write_record<W: Write>(out: &mut W, record: &UpdateRecord) -> Result<(), OutputError> {
    let json = to_json(record)?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}
