// =============================================================================
// 共通設定・定数モジュール
// =============================================================================
// InnerTube APIへのリクエストで使用する固定値を定義
//
// 注意:
// - 非公式APIのため、ここにある値はYouTube Music側の変更で無効になり得る
// - 値の更新はこのファイルだけで完結させ、パーサー側には持ち込まない
// =============================================================================

/// InnerTube APIのオリジン
pub const INNERTUBE_ORIGIN: &str = "https://music.youtube.com";

/// InnerTube APIのパスプレフィックス（`{origin}{prefix}{path}?prettyPrint=false`）
pub const INNERTUBE_API_PREFIX: &str = "/youtubei/v1";

/// プレーヤーエンドポイント（ストリームURL取得）
pub const PLAYER_PATH: &str = "/player";

/// 検索エンドポイント
pub const SEARCH_PATH: &str = "/search";

/// 検索候補エンドポイント
pub const SUGGESTIONS_PATH: &str = "/music/get_search_suggestions";

/// 全リクエスト共通のヘッダー（User-Agentはクライアントごとに異なる）
pub const ACCEPT_LANGUAGE: &str = "en-US,en";
pub const CONTENT_TYPE: &str = "application/json";
pub const HOST: &str = "music.youtube.com";
pub const ORIGIN: &str = "https://music.youtube.com";
pub const REFERER: &str = "https://music.youtube.com/";

/// リクエストのcontext.clientに載せる公式クライアントの識別情報
///
/// InnerTubeはclientNameとclientVersionでレスポンスの形を切り替えるため、
/// User-Agentも同じクライアントのものに揃える必要がある。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIdentity {
    pub name: &'static str,
    pub version: &'static str,
    pub user_agent: &'static str,
}

/// Androidアプリ（署名なしの直接URLが返る）
pub const ANDROID: ClientIdentity = ClientIdentity {
    name: "ANDROID",
    version: "20.10.38",
    user_agent: "com.google.android.youtube/20.10.38 (Linux; U; Android 11) gzip",
};

/// YouTube Music Web版
/// YouTube側で定期的に更新されるため、必要に応じて更新すること
pub const WEB_REMIX: ClientIdentity = ClientIdentity {
    name: "WEB_REMIX",
    version: "1.20251006.03.00",
    user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.3",
};

/// 検索対象を「曲」カテゴリに絞るparams値
///
/// サーバー側の非公開パラメータのため、バイト単位でそのまま保持すること。
pub const SONGS_SCOPE_TOKEN: &str = "EgWKAQIIAQ==";

/// 曲以外のカテゴリラベル
///
/// 「曲」スコープでも他カテゴリが混ざって返るため、これらは必ず除外する。
pub const EXCLUDED_CATEGORIES: &[&str] = &[
    "Album", "Artist", "Episode", "Playlist", "Podcast", "Profile", "Video",
];

/// ストリームURL抽出時のデフォルトMIMEプレフィックス
pub const DEFAULT_AUDIO_MIME: &str = "audio/mp4";

/// カテゴリラベルが除外対象かどうか
pub fn is_excluded_category(label: &str) -> bool {
    EXCLUDED_CATEGORIES.contains(&label)
}
