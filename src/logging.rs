//! ログ出力の初期化
//!
//! ライブラリ側は `log` マクロで出力し、バイナリではtracing-subscriberで受ける。
//! 標準出力はJSON結果専用のため、ログは標準エラーに出す。

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 未設定時のフィルタ
const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // 失敗するのはグローバルsubscriberが設定済みの場合のみ（二重初期化）
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
