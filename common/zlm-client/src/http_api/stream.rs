use serde::Deserialize;

use super::response::null_as_default;

/// Information about a media stream active on a [ZLMediaKit] server.
///
/// The pair of [`StreamInfo::app`] and [`StreamInfo::stream`] identifies the
/// stream in all the subsequent lookups.
///
/// Fields absent or `null` in the server's response are decoded as their
/// zero values.
///
/// [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct StreamInfo {
    /// Application (namespace) the stream belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub app: String,

    /// Name of the stream within its application.
    #[serde(deserialize_with = "null_as_default")]
    pub stream: String,

    /// URL the server has pulled (or has been pushed) this stream from.
    #[serde(deserialize_with = "null_as_default")]
    pub origin_url: String,

    /// Creation timestamp, as reported by the server.
    #[serde(deserialize_with = "null_as_default")]
    pub create_time: String,

    /// Number of seconds the stream is alive.
    #[serde(deserialize_with = "null_as_default")]
    pub alive_second: i64,

    /// Current throughput of the stream, in bytes per second.
    #[serde(deserialize_with = "null_as_default")]
    pub bytes_speed: i64,

    /// Total number of bytes transferred by the stream.
    #[serde(deserialize_with = "null_as_default")]
    pub total_bytes: i64,
}
