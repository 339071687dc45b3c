//! テスト用のレスポンスフィクスチャ

use serde_json::{json, Value};

pub fn player_ok(formats: Vec<Value>) -> Value {
    json!({
        "playabilityStatus": {"status": "OK"},
        "streamingData": {"adaptiveFormats": formats}
    })
}

pub fn format(mime: &str, url: &str) -> Value {
    json!({"mimeType": mime, "url": url})
}

/// 曲シェルフの1エントリ（2列目は [カテゴリ, " • ", 再生時間]）
pub fn shelf_entry(id: &str, name: &str, category: &str, duration: &str) -> Value {
    json!({
        "musicResponsiveListItemRenderer": {
            "thumbnail": {
                "musicThumbnailRenderer": {
                    "thumbnail": {
                        "thumbnails": [
                            {"url": format!("https://i.ytimg.com/{}/small.jpg", id), "width": 60, "height": 60},
                            {"url": format!("https://i.ytimg.com/{}/large.jpg", id), "width": 120, "height": 120}
                        ]
                    }
                }
            },
            "flexColumns": [
                {
                    "musicResponsiveListItemFlexColumnRenderer": {
                        "text": {
                            "runs": [{
                                "text": name,
                                "navigationEndpoint": {"watchEndpoint": {"videoId": id}}
                            }]
                        }
                    }
                },
                {
                    "musicResponsiveListItemFlexColumnRenderer": {
                        "text": {
                            "runs": [
                                {"text": category},
                                {"text": " • "},
                                {"text": duration}
                            ]
                        }
                    }
                }
            ]
        }
    })
}

pub fn music_shelf(entries: Vec<Value>) -> Value {
    json!({"musicShelfRenderer": {"contents": entries}})
}

pub fn search_page(sections: Vec<Value>) -> Value {
    json!({
        "contents": {
            "tabbedSearchResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "content": {
                            "sectionListRenderer": {"contents": sections}
                        }
                    }
                }]
            }
        }
    })
}

pub fn suggestion(query: &str) -> Value {
    json!({
        "searchSuggestionRenderer": {
            "navigationEndpoint": {"searchEndpoint": {"query": query}}
        }
    })
}

pub fn suggestions_page(entries: Vec<Value>) -> Value {
    json!({
        "contents": [{
            "searchSuggestionsSectionRenderer": {"contents": entries}
        }]
    })
}
