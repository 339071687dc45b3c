//! InnerTube レスポンスパーサー
//!
//! 固定パス（タブやセクション一覧まで）が欠けている場合はレスポンス形状の変化とみなして
//! `InnerTubeError::Parse` を返す。個々のエントリが壊れている場合はそのエントリだけを読み飛ばす。

use serde::Deserialize;
use serde_json::Value;

use super::errors::InnerTubeError;
use super::types::*;
use crate::config::is_excluded_category;

/// 件数上限（Noneなら無制限）
fn limit(size: Option<usize>) -> usize {
    size.unwrap_or(usize::MAX)
}

/// /player レスポンスからMIMEプレフィックスに一致するストリームURLを抽出
///
/// playabilityStatus.status が "OK" 以外の場合は、streamingDataの内容に関わらず
/// その値をそのまま `InnerTubeError::Playability` として返す。
pub fn parse_player_response(
    response: &Value,
    mime: &str,
    size: Option<usize>,
) -> Result<Vec<String>, InnerTubeError> {
    let player = PlayerResponse::deserialize(response)?;

    let status = player.playability_status.status;
    if status != "OK" {
        log::warn!("Video is not playable: {}", status);
        return Err(InnerTubeError::Playability(status));
    }

    let streaming_data = player
        .streaming_data
        .ok_or_else(|| InnerTubeError::missing("streamingData"))?;
    let streaming_data = StreamingData::deserialize(&streaming_data)?;

    let urls = streaming_data
        .adaptive_formats
        .iter()
        .filter_map(|format| AdaptiveFormat::deserialize(format).ok())
        .filter(|format| {
            format
                .mime_type
                .as_deref()
                .is_some_and(|mime_type| mime_type.starts_with(mime))
        })
        .filter_map(|format| format.url)
        .take(limit(size))
        .collect();

    Ok(urls)
}

/// /search レスポンスから曲を抽出
pub fn parse_search_response(
    response: &Value,
    size: Option<usize>,
) -> Result<Vec<Track>, InnerTubeError> {
    let search = SearchResponse::deserialize(response)?;

    let tab = search
        .contents
        .tabbed_search_results_renderer
        .tabs
        .first()
        .ok_or_else(|| InnerTubeError::missing("contents.tabbedSearchResultsRenderer.tabs[0]"))?;
    let tab = SearchTab::deserialize(tab)?;

    // musicShelfRenderer以外のセクション（トップ結果など）は無視
    let tracks = tab
        .tab_renderer
        .content
        .section_list_renderer
        .contents
        .iter()
        .filter_map(|section| section.get("musicShelfRenderer"))
        .filter_map(|shelf| MusicShelfRenderer::deserialize(shelf).ok())
        .flat_map(|shelf| shelf.contents)
        .filter_map(|entry| parse_track(&entry))
        .take(limit(size))
        .collect();

    Ok(tracks)
}

/// シェルフの1エントリをTrackに変換
///
/// 列0: 曲名とvideoId、列1: 先頭ランがカテゴリ（またはアーティスト）、末尾ランが再生時間
fn parse_track(entry: &Value) -> Option<Track> {
    let item = match ShelfEntry::deserialize(entry) {
        Ok(entry) => entry.music_responsive_list_item_renderer,
        Err(e) => {
            log::debug!("Skipping malformed shelf entry: {}", e);
            return None;
        }
    };

    let details = flex_column(&item.flex_columns, 1)?;
    let category = TextRun::deserialize(details.runs().first()?).ok()?.text;
    if is_excluded_category(&category) {
        log::debug!("Skipping non-track entry: {}", category);
        return None;
    }
    let duration = TextRun::deserialize(details.runs().last()?).ok()?.text;

    let title = flex_column(&item.flex_columns, 0)?;
    let title = TitleRun::deserialize(title.runs().first()?).ok()?;

    let thumbnail = item
        .thumbnail
        .music_thumbnail_renderer
        .thumbnail
        .thumbnails
        .first()?;
    let thumbnail = Thumbnail::deserialize(thumbnail).ok()?.url;

    Some(Track {
        id: title.navigation_endpoint.watch_endpoint.video_id,
        name: title.text,
        creator: category,
        thumbnail,
        duration,
    })
}

/// 指定位置の列だけをデコード（他の列の形は問わない）
fn flex_column(columns: &[Value], index: usize) -> Option<FlexColumn> {
    FlexColumn::deserialize(columns.get(index)?).ok()
}

/// /music/get_search_suggestions レスポンスから検索候補を抽出
pub fn parse_suggestions_response(
    response: &Value,
    size: Option<usize>,
) -> Result<Vec<String>, InnerTubeError> {
    let suggestions = SuggestionsResponse::deserialize(response)?;

    let section = suggestions
        .contents
        .first()
        .ok_or_else(|| InnerTubeError::missing("contents[0]"))?;
    let section = SuggestionsSection::deserialize(section)?;

    let queries = section
        .search_suggestions_section_renderer
        .contents
        .iter()
        .filter_map(parse_suggestion)
        .take(limit(size))
        .collect();

    Ok(queries)
}

fn parse_suggestion(entry: &Value) -> Option<String> {
    let entry = SuggestionEntry::deserialize(entry)
        .map_err(|e| log::debug!("Skipping suggestion entry: {}", e))
        .ok()?;
    entry
        .search_suggestion_renderer
        .navigation_endpoint
        .search_endpoint
        .map(|endpoint| endpoint.query)
}
