//! ログインフラモジュール

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 既定のログレベル
///
/// 標準出力は連携先アプリが読むため、通常は警告以上のみ出す
const DEFAULT_LEVEL: &str = "warn";

/// ログシステムを初期化
///
/// RUST_LOG環境変数でログレベルを設定可能:
/// - error: エラーのみ
/// - warn: 警告以上（デフォルト）
/// - info: 情報以上
/// - debug: デバッグ情報以上
/// - trace: すべて
///
/// 出力先は常に標準エラー
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// RUST_LOG未設定時のフィルタ
fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LEVEL)
}
