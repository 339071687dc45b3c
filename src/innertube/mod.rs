//! InnerTube API クライアントモジュール
//!
//! YouTube Musicの内部APIを使用して、音声ストリームURL・曲検索・検索候補を取得する。
//! APIキー・ログイン不要。
//!
//! ## 注意事項
//! - 非公式APIのため、仕様変更のリスクあり
//! - クライアント情報や検索paramsは `config` に固定値として置いている

pub mod api;
pub mod client;
pub mod errors;
pub mod parser;
pub mod types;

#[cfg(test)]
mod fixtures;

pub use api::{audio, audio_with_mime, search, suggestions};
pub use client::{HttpTransport, Transport};
pub use errors::InnerTubeError;
pub use types::{InnerTubeRequest, Track};
