//! InnerTube API トランスポート実装

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::errors::InnerTubeError;
use super::types::InnerTubeRequest;
use crate::config::{INNERTUBE_API_PREFIX, INNERTUBE_ORIGIN};

/// InnerTubeへのPOSTを1回だけ実行する
///
/// 200以外は `InnerTubeError::Status`。リトライ・タイムアウトは持たない。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &InnerTubeRequest) -> Result<Value, InnerTubeError>;
}

/// reqwestによるトランスポート
///
/// `reqwest::Client` は内部でコネクションプールを共有するため、
/// 1つのインスタンスを複数の呼び出しで使い回せる。
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    origin: String,
}

impl HttpTransport {
    /// 新しいトランスポートを作成
    ///
    /// # Errors
    /// HTTPクライアントのビルドに失敗した場合にエラーを返す
    pub fn new() -> Result<Self, InnerTubeError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// 既存のHTTPクライアントを使う
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            origin: INNERTUBE_ORIGIN.to_string(),
        }
    }

    /// 接続先オリジンを差し替える（テスト用のモックサーバーなど）
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// `{origin}/youtubei/v1{path}?prettyPrint=false`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}{}?prettyPrint=false",
            self.origin.trim_end_matches('/'),
            INNERTUBE_API_PREFIX,
            path
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &InnerTubeRequest) -> Result<Value, InnerTubeError> {
        let url = self.endpoint(request.path);
        let body = serde_json::to_vec(&request.body)?;

        log::debug!("POST {} as {}", url, request.identity.name);

        let mut builder = self.client.post(&url).body(body);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::error!("InnerTube API error: {} ({})", status, request.path);
            return Err(InnerTubeError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ANDROID, WEB_REMIX};
    use mockito::Matcher;
    use serde_json::json;

    fn transport(server: &mockito::Server) -> HttpTransport {
        HttpTransport::new().unwrap().with_origin(server.url())
    }

    #[test]
    fn test_endpoint_template() {
        let transport = HttpTransport::new().unwrap();
        assert_eq!(
            transport.endpoint("/player"),
            "https://music.youtube.com/youtubei/v1/player?prettyPrint=false"
        );
        assert_eq!(
            transport.endpoint("/music/get_search_suggestions"),
            "https://music.youtube.com/youtubei/v1/music/get_search_suggestions?prettyPrint=false"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_origin() {
        let transport = HttpTransport::new()
            .unwrap()
            .with_origin("http://127.0.0.1:1234/");
        assert_eq!(
            transport.endpoint("/search"),
            "http://127.0.0.1:1234/youtubei/v1/search?prettyPrint=false"
        );
    }

    #[tokio::test]
    async fn test_execute_posts_compact_json_with_headers() {
        let mut server = mockito::Server::new_async().await;
        let request = InnerTubeRequest::player("dQw4w9WgXcQ");
        let compact = serde_json::to_string(&request.body).unwrap();

        let mock = server
            .mock("POST", "/youtubei/v1/player")
            .match_query(Matcher::UrlEncoded("prettyPrint".into(), "false".into()))
            .match_header("user-agent", ANDROID.user_agent)
            .match_header("content-type", "application/json")
            .match_header("accept-language", "en-US,en")
            .match_header("origin", "https://music.youtube.com")
            .match_header("referer", "https://music.youtube.com/")
            .match_body(Matcher::Exact(compact))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"playabilityStatus":{"status":"OK"}}"#)
            .create_async()
            .await;

        let response = transport(&server).execute(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response, json!({"playabilityStatus": {"status": "OK"}}));
    }

    #[tokio::test]
    async fn test_execute_uses_browser_user_agent_for_web_remix() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/youtubei/v1/search")
            .match_query(Matcher::Any)
            .match_header("user-agent", WEB_REMIX.user_agent)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let response = transport(&server)
            .execute(&InnerTubeRequest::search("query"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response, json!({}));
    }

    #[tokio::test]
    async fn test_execute_non_200_is_status_error() {
        for code in [403_usize, 500] {
            let mut server = mockito::Server::new_async().await;
            let mock = server
                .mock("POST", "/youtubei/v1/music/get_search_suggestions")
                .match_query(Matcher::Any)
                .with_status(code)
                .with_body("{}")
                .create_async()
                .await;

            let result = transport(&server)
                .execute(&InnerTubeRequest::suggestions("a"))
                .await;

            mock.assert_async().await;
            match result {
                Err(InnerTubeError::Status(status)) => assert_eq!(status as usize, code),
                other => panic!("Expected status error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_execute_invalid_json_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/youtubei/v1/player")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let result = transport(&server)
            .execute(&InnerTubeRequest::player("x"))
            .await;

        assert!(matches!(result, Err(InnerTubeError::Parse(_))));
    }
}
