//! ストリームURL取得・曲検索・検索候補の3操作
//!
//! いずれも1回のPOSTだけを行う。`transport` を渡した場合はそれを使い回し、
//! `None` の場合はこの呼び出し専用の `HttpTransport` を作って呼び出し後に破棄する。

use serde_json::Value;

use super::client::{HttpTransport, Transport};
use super::errors::InnerTubeError;
use super::parser::{parse_player_response, parse_search_response, parse_suggestions_response};
use super::types::{InnerTubeRequest, Track};
use crate::config::DEFAULT_AUDIO_MIME;

async fn send(
    request: &InnerTubeRequest,
    transport: Option<&dyn Transport>,
) -> Result<Value, InnerTubeError> {
    match transport {
        Some(transport) => transport.execute(request).await,
        None => HttpTransport::new()?.execute(request).await,
    }
}

/// 動画IDから音声ストリームURL（`audio/mp4`）を取得
pub async fn audio(
    code: &str,
    size: Option<usize>,
    transport: Option<&dyn Transport>,
) -> Result<Vec<String>, InnerTubeError> {
    audio_with_mime(code, size, DEFAULT_AUDIO_MIME, transport).await
}

/// 動画IDからMIMEプレフィックスに一致するストリームURLを取得
///
/// # Errors
/// - `InnerTubeError::Playability` 再生不可（年齢制限・地域制限・非公開など）
/// - その他 HTTPエラー、レスポンス形状の不一致
pub async fn audio_with_mime(
    code: &str,
    size: Option<usize>,
    mime: &str,
    transport: Option<&dyn Transport>,
) -> Result<Vec<String>, InnerTubeError> {
    let response = send(&InnerTubeRequest::player(code), transport).await?;
    let urls = parse_player_response(&response, mime, size)?;
    log::debug!("Resolved {} stream URL(s) for {}", urls.len(), code);
    Ok(urls)
}

/// 曲を検索
pub async fn search(
    value: &str,
    size: Option<usize>,
    transport: Option<&dyn Transport>,
) -> Result<Vec<Track>, InnerTubeError> {
    let response = send(&InnerTubeRequest::search(value), transport).await?;
    parse_search_response(&response, size)
}

/// 入力途中の文字列から検索候補を取得
pub async fn suggestions(
    value: &str,
    size: Option<usize>,
    transport: Option<&dyn Transport>,
) -> Result<Vec<String>, InnerTubeError> {
    let response = send(&InnerTubeRequest::suggestions(value), transport).await?;
    parse_suggestions_response(&response, size)
}
