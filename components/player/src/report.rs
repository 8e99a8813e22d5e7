//! Console report of the player.

use zlm_client::StreamInfo;

/// Renders the header line announcing the number of active streams.
#[must_use]
pub fn streams_count(count: usize) -> String {
    format!("Active streams: {count}")
}

/// Renders the summary line of the given [`StreamInfo`].
#[must_use]
pub fn stream_summary(info: &StreamInfo) -> String {
    format!(
        "App: {}, Stream: {}, AliveSecond: {}",
        info.app, info.stream, info.alive_second,
    )
}

/// Renders the line announcing the playback URL of a stream.
#[must_use]
pub fn playback_url(url: &str) -> String {
    format!("Playback URL: {url}")
}
