//! InnerTube API 固有の型定義
//!
//! レスポンスはUI描画用の汎用ツリーであり安定したスキーマを持たないため、
//! 実際に読むキーだけを型にしている（未知のフィールドは無視される）。

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{
    self, ClientIdentity, ANDROID, PLAYER_PATH, SEARCH_PATH, SONGS_SCOPE_TOKEN, SUGGESTIONS_PATH,
    WEB_REMIX,
};

// =============================================================================
// 公開データ型
// =============================================================================

/// 検索結果の1曲
///
/// JSON出力のキーは `code`, `name`, `creator`, `image`, `duration`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// 動画ID
    #[serde(rename = "code")]
    pub id: String,
    pub name: String,
    /// 2列目の先頭ラン（通常はアーティスト名）
    pub creator: String,
    /// 最初のサムネイルURL
    #[serde(rename = "image")]
    pub thumbnail: String,
    /// 表示用の再生時間（例: "3:42"）
    pub duration: String,
}

// =============================================================================
// リクエスト
// =============================================================================

/// 1回分のInnerTubeリクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct InnerTubeRequest {
    /// `/player` などのエンドポイント
    pub path: &'static str,
    /// なりすますクライアント（User-Agentもここから決まる）
    pub identity: ClientIdentity,
    pub body: Value,
}

impl InnerTubeRequest {
    /// ストリームURL取得（ANDROIDクライアント）
    pub fn player(video_id: &str) -> Self {
        Self {
            path: PLAYER_PATH,
            identity: ANDROID,
            body: json!({
                "context": client_context(&ANDROID),
                "videoId": video_id
            }),
        }
    }

    /// 曲検索（WEB_REMIXクライアント、曲スコープ固定）
    pub fn search(query: &str) -> Self {
        Self {
            path: SEARCH_PATH,
            identity: WEB_REMIX,
            body: json!({
                "context": client_context(&WEB_REMIX),
                "params": SONGS_SCOPE_TOKEN,
                "query": query
            }),
        }
    }

    /// 検索候補（WEB_REMIXクライアント）
    pub fn suggestions(input: &str) -> Self {
        Self {
            path: SUGGESTIONS_PATH,
            identity: WEB_REMIX,
            body: json!({
                "context": client_context(&WEB_REMIX),
                "input": input
            }),
        }
    }

    /// 全リクエスト共通のヘッダー
    pub fn headers(&self) -> [(&'static str, &'static str); 6] {
        [
            ("Accept-language", config::ACCEPT_LANGUAGE),
            ("Content-type", config::CONTENT_TYPE),
            ("Host", config::HOST),
            ("Origin", config::ORIGIN),
            ("Referer", config::REFERER),
            ("User-Agent", self.identity.user_agent),
        ]
    }
}

fn client_context(identity: &ClientIdentity) -> Value {
    json!({
        "client": {
            "clientName": identity.name,
            "clientVersion": identity.version
        }
    })
}

// =============================================================================
// /player レスポンス
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub playability_status: PlayabilityStatus,
    /// ステータスがOKの場合のみ読む
    pub streaming_data: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PlayabilityStatus {
    pub status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingData {
    pub adaptive_formats: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveFormat {
    pub mime_type: Option<String>,
    /// 署名付き（signatureCipher）のフォーマットにはurlがない
    pub url: Option<String>,
}

// =============================================================================
// /search レスポンス
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub contents: SearchContents,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContents {
    pub tabbed_search_results_renderer: TabbedSearchResultsRenderer,
}

#[derive(Debug, Deserialize)]
pub struct TabbedSearchResultsRenderer {
    pub tabs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTab {
    pub tab_renderer: TabRenderer,
}

#[derive(Debug, Deserialize)]
pub struct TabRenderer {
    pub content: TabContent,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabContent {
    pub section_list_renderer: SectionListRenderer,
}

#[derive(Debug, Deserialize)]
pub struct SectionListRenderer {
    /// 各セクション（musicShelfRenderer以外も混在する）
    pub contents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct MusicShelfRenderer {
    #[serde(default)]
    pub contents: Vec<Value>,
}

/// シェルフ内の1エントリ
///
/// 列・ラン・サムネイルは読む要素だけを個別にデコードするため `Value` のまま保持する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelfEntry {
    pub music_responsive_list_item_renderer: ListItemRenderer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItemRenderer {
    #[serde(default)]
    pub flex_columns: Vec<Value>,
    pub thumbnail: ItemThumbnail,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexColumn {
    pub music_responsive_list_item_flex_column_renderer: FlexColumnRenderer,
}

impl FlexColumn {
    pub fn runs(&self) -> &[Value] {
        &self.music_responsive_list_item_flex_column_renderer.text.runs
    }
}

#[derive(Debug, Deserialize)]
pub struct FlexColumnRenderer {
    pub text: RunsText,
}

#[derive(Debug, Deserialize)]
pub struct RunsText {
    #[serde(default)]
    pub runs: Vec<Value>,
}

/// テキストのみのラン（navigationEndpointなどは読まない）
#[derive(Debug, Deserialize)]
pub struct TextRun {
    pub text: String,
}

/// 列0の先頭ラン（曲名とvideoId）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleRun {
    pub text: String,
    pub navigation_endpoint: TitleEndpoint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleEndpoint {
    pub watch_endpoint: WatchEndpoint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchEndpoint {
    pub video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemThumbnail {
    pub music_thumbnail_renderer: MusicThumbnailRenderer,
}

#[derive(Debug, Deserialize)]
pub struct MusicThumbnailRenderer {
    pub thumbnail: ThumbnailContainer,
}

#[derive(Debug, Deserialize)]
pub struct ThumbnailContainer {
    #[serde(default)]
    pub thumbnails: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Thumbnail {
    pub url: String,
}

// =============================================================================
// /music/get_search_suggestions レスポンス
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct SuggestionsResponse {
    pub contents: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsSection {
    pub search_suggestions_section_renderer: SuggestionsSectionRenderer,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsSectionRenderer {
    pub contents: Vec<Value>,
}

/// 検索候補の1エントリ（履歴候補などはsearchSuggestionRendererを持たない）
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionEntry {
    pub search_suggestion_renderer: SearchSuggestionRenderer,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSuggestionRenderer {
    pub navigation_endpoint: SuggestionEndpoint,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionEndpoint {
    pub search_endpoint: Option<SearchEndpoint>,
}

#[derive(Debug, Deserialize)]
pub struct SearchEndpoint {
    pub query: String,
}
