//! [HTTP API][1] definitions of [ZLMediaKit].
//!
//! [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
//! [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html

mod error;
mod response;
mod stream;

pub use self::{
    error::{ErrorKind, ZlmClientError},
    stream::StreamInfo,
};

use std::time::Duration;

use reqwest::{Client, Response as ReqwestResponse};
use serde::de::DeserializeOwned;
use url::Url;

use self::response::ZlmResp;

/// Client for performing requests to [HTTP API][1] of a [ZLMediaKit] server.
///
/// Holds no mutable state, so may be freely shared between concurrent
/// callers.
///
/// [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
/// [1]: https://docs.zlmediakit.com/guide/media_server/restful_api.html
#[derive(Clone, Debug)]
pub struct ZlmClient {
    base_url: String,
    timeout: Duration,
}

impl ZlmClient {
    /// Creates a new [`ZlmClient`] requesting the server at the given
    /// `base_url`, with every request limited by the given `timeout`.
    ///
    /// Neither of the values is validated: a malformed `base_url` fails the
    /// requests using it, and a zero `timeout` disables the limit.
    #[must_use]
    pub fn new<S: Into<String>>(base_url: S, timeout: Duration) -> Self {
        let base_url = base_url.into();
        tracing::debug!("base_url: {base_url}");
        Self { base_url, timeout }
    }

    /// Returns the base URL of the server this [`ZlmClient`] requests.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the timeout applied to every request of this [`ZlmClient`].
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn api_url(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, ZlmClientError> {
        let mut url =
            Url::parse(&format!("{}/index/api/{method}", self.base_url))
                .map_err(ZlmClientError::IncorrectApiUrl)?;
        if !params.is_empty() {
            let _ = url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<Option<T>, ZlmClientError> {
        // Every call owns its transport, so nothing is shared between calls.
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if !self.timeout.is_zero() {
            builder = builder.timeout(self.timeout);
        }
        let http_client =
            builder.build().map_err(ZlmClientError::RequestFailed)?;

        tracing::debug!("requesting: {url}");
        let resp = http_client
            .get(url)
            .send()
            .await
            .map_err(ZlmClientError::RequestFailed)?;
        Self::process_resp(resp).await
    }

    async fn process_resp<T: DeserializeOwned>(
        resp: ReqwestResponse,
    ) -> Result<Option<T>, ZlmClientError> {
        let status = resp.status();
        tracing::debug!("processing response from: {}", resp.url());
        let body =
            resp.bytes().await.map_err(ZlmClientError::RequestFailed)?;

        // The envelope carries the server's own failure message, so it wins
        // over the HTTP status whenever it decodes.
        let envelope = match serde_json::from_slice::<ZlmResp<T>>(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ZlmClientError::BadStatus(status));
            }
            Err(e) => return Err(ZlmClientError::DeserializeError(e)),
        };
        let data = envelope.into_data().map_err(|e| {
            tracing::warn!("ZLMediaKit HTTP API failure: {e}");
            e
        })?;
        if !status.is_success() {
            return Err(ZlmClientError::BadStatus(status));
        }
        Ok(data)
    }

    /// Lists all the media streams currently active on the server, in the
    /// order the server returns them.
    ///
    /// # Errors
    ///
    /// If API request cannot be performed, or fails. See
    /// [`ZlmClientError`](enum@ZlmClientError) for details.
    pub async fn list_streams(
        &self,
    ) -> Result<Vec<StreamInfo>, ZlmClientError> {
        let url = self.api_url("getMediaList", &[])?;
        Ok(self.get(url).await?.unwrap_or_default())
    }

    /// Retrieves details of the stream identified by the given `app` and
    /// `stream`.
    ///
    /// Returns [`None`] if the server reports success without any data, so
    /// callers have to check it explicitly.
    ///
    /// # Errors
    ///
    /// If API request cannot be performed, or fails. See
    /// [`ZlmClientError`](enum@ZlmClientError) for details.
    pub async fn get_stream_detail(
        &self,
        app: &str,
        stream: &str,
    ) -> Result<Option<StreamInfo>, ZlmClientError> {
        let url =
            self.api_url("getMediaInfo", &[("app", app), ("stream", stream)])?;
        self.get(url).await
    }

    /// Builds the [HLS] playlist URL of the stream identified by the given
    /// `app` and `stream`.
    ///
    /// Performs no request and no escaping: malformed inputs produce a
    /// malformed URL.
    ///
    /// [HLS]: https://en.wikipedia.org/wiki/HTTP_Live_Streaming
    #[must_use]
    pub fn hls_pull_url(&self, app: &str, stream: &str) -> String {
        format!("{}/{app}/{stream}/hls/index.m3u8", self.base_url)
    }

    /// Checks that the stream identified by the given `app` and `stream`
    /// exists on the server, and returns its [HLS] playlist URL.
    ///
    /// The check and the URL building are not atomic: the stream may stop
    /// existing right after the check, so the returned URL is not
    /// guaranteed to be playable.
    ///
    /// # Errors
    ///
    /// Whenever [`ZlmClient::get_stream_detail()`] fails.
    ///
    /// [HLS]: https://en.wikipedia.org/wiki/HTTP_Live_Streaming
    pub async fn playback_hls(
        &self,
        app: &str,
        stream: &str,
    ) -> Result<String, ZlmClientError> {
        let _ = self.get_stream_detail(app, stream).await?;
        Ok(self.hls_pull_url(app, stream))
    }
}
