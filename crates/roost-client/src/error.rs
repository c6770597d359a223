use http::StatusCode;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] sonic_rs::Error),

    #[error("fail to get auth url")]
    EmptyAuthUrl,

    #[error(transparent)]
    FormEncode(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Http(#[from] http::Error),

    #[error(transparent)]
    HttpClient(#[from] roost_http_client::Error),

    #[error("Request failed: {0}")]
    RequestFailed(StatusCode),
}
