use derive_more::{Display, Error};
use reqwest::{Error as ReqwestError, StatusCode};

/// Possible errors of performing requests to [ZLMediaKit HTTP API][1].
///
/// [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Display, Error)]
pub enum ZlmClientError {
    /// Failed to build an API URL out of the configured base URL.
    #[display(fmt = "Failed to parse URL: {_0}")]
    IncorrectApiUrl(url::ParseError),

    /// Performing HTTP request failed itself (including timeouts).
    #[display(fmt = "Failed to perform HTTP request: {_0}")]
    RequestFailed(ReqwestError),

    /// [ZLMediaKit HTTP API][1] responded with a bad [`StatusCode`].
    ///
    /// [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html
    #[display(fmt = "ZLMediaKit HTTP API responded with bad status: {_0}")]
    BadStatus(#[error(not(source))] StatusCode),

    /// Response body is not a JSON of the expected shape.
    #[display(fmt = "Failed to deserialize response: {_0}")]
    DeserializeError(serde_json::Error),

    /// [ZLMediaKit HTTP API][1] responded with a non-zero `code`.
    ///
    /// [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html
    #[display(fmt = "ZLMediaKit HTTP API responded with error {code}: {msg}")]
    ApiError {
        /// Status `code` of the response envelope.
        code: i64,
        /// Message supplied by the server.
        msg: String,
    },
}

/// Category of a [`ZlmClientError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The request could not be performed or its response not received.
    Transport,

    /// The server answered with a failure `code` in its envelope.
    Application,

    /// The response body could not be decoded.
    Decode,
}

impl ZlmClientError {
    /// Returns the [`ErrorKind`] this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IncorrectApiUrl(_)
            | Self::RequestFailed(_)
            | Self::BadStatus(_) => ErrorKind::Transport,
            Self::ApiError { .. } => ErrorKind::Application,
            Self::DeserializeError(_) => ErrorKind::Decode,
        }
    }

    /// Indicates whether the request has been aborted by the configured
    /// timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::RequestFailed(e) if e.is_timeout())
    }
}
