use thiserror::Error;

/// InnerTube呼び出しのエラー
///
/// `Playability` 以外はすべてトランスポート系（HTTP・レスポンス形状の問題）。
#[derive(Error, Debug)]
pub enum InnerTubeError {
    #[error("{0} HTTP status")]
    Status(u16),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// playabilityStatus.status の値をそのまま保持する（LOGIN_REQUIRED, UNPLAYABLE など）
    #[error("{0}")]
    Playability(String),
}

impl InnerTubeError {
    /// 非200ステータスの場合のみステータスコードを返す
    pub fn status_code(&self) -> Option<u16> {
        match self {
            InnerTubeError::Status(code) => Some(*code),
            _ => None,
        }
    }

    pub fn is_playability(&self) -> bool {
        matches!(self, InnerTubeError::Playability(_))
    }

    pub(crate) fn missing(path: &str) -> Self {
        InnerTubeError::Parse(format!("missing {}", path))
    }
}

impl From<serde_json::Error> for InnerTubeError {
    fn from(err: serde_json::Error) -> Self {
        InnerTubeError::Parse(err.to_string())
    }
}

impl From<InnerTubeError> for String {
    fn from(err: InnerTubeError) -> String {
        err.to_string()
    }
}
