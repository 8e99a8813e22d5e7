//! Listing and playback of the server streams.

use zlm_client::ZlmClient;
use zlm_log::log;

use crate::{cli::Failure, report, Settings};

/// Lists the streams of the configured server and prints the [HLS] playback
/// URL of the first one.
///
/// # Errors
///
/// If listing the streams or checking the first one fails. The actual error
/// is logged.
///
/// [HLS]: https://en.wikipedia.org/wiki/HTTP_Live_Streaming
#[tokio::main]
pub async fn run(settings: Settings) -> Result<(), Failure> {
    let timeout = settings.server.timeout();
    let client = ZlmClient::new(settings.server.base_url, timeout);

    let streams = client.list_streams().await.map_err(|e| {
        log::error!("Failed to list streams: {e}");
    })?;

    println!("{}", report::streams_count(streams.len()));
    for info in &streams {
        println!("{}", report::stream_summary(info));
    }

    if let Some(first) = streams.first() {
        let url = client
            .playback_hls(&first.app, &first.stream)
            .await
            .map_err(|e| {
                log::error!(
                    "Failed to play `{}/{}` stream: {e}",
                    first.app,
                    first.stream,
                );
            })?;
        println!("{}", report::playback_url(&url));
    }

    Ok(())
}
