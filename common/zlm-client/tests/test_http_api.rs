use std::{
    collections::HashMap,
    net::SocketAddr,
    time::{Duration, Instant},
};

use actix_web::{
    dev::ServerHandle, http::StatusCode, rt, web, App, HttpResponse,
    HttpServer,
};
use zlm_client::{ErrorKind, ZlmClient};

const ONE_STREAM: &str = r#"{"code":0,"msg":"","data":[{"app":"live",
    "stream":"test","origin_url":"","create_time":"","alive_second":10,
    "bytes_speed":0,"total_bytes":0}]}"#;

const FAILURE: &str = r#"{"code":1,"msg":"boom","data":null}"#;

const NO_DATA: &str = r#"{"code":0,"msg":"","data":null}"#;

/// Fake ZLMediaKit server answering both API methods with fixed bodies.
struct FakeZlm {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl FakeZlm {
    fn spawn(list_body: &'static str, info_body: &'static str) -> Self {
        Self::spawn_with_delay(list_body, info_body, Duration::ZERO)
    }

    fn spawn_with_delay(
        list_body: &'static str,
        info_body: &'static str,
        delay: Duration,
    ) -> Self {
        let server = HttpServer::new(move || {
            App::new()
                .route(
                    "/index/api/getMediaList",
                    web::get().to(move || async move {
                        rt::time::sleep(delay).await;
                        HttpResponse::Ok()
                            .content_type("application/json")
                            .body(list_body)
                    }),
                )
                .route(
                    "/index/api/getMediaInfo",
                    web::get().to(move || async move {
                        HttpResponse::Ok()
                            .content_type("application/json")
                            .body(info_body)
                    }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind fake ZLMediaKit server");
        let addr = server.addrs()[0];

        let server = server.run();
        let handle = server.handle();
        drop(rt::spawn(server));

        Self { addr, handle }
    }

    fn client(&self, timeout: Duration) -> ZlmClient {
        ZlmClient::new(format!("http://{}", self.addr), timeout)
    }

    async fn stop(self) {
        self.handle.stop(false).await;
    }
}

#[actix_web::test]
async fn test_list_streams() {
    let zlm = FakeZlm::spawn(ONE_STREAM, NO_DATA);
    let client = zlm.client(Duration::from_secs(5));

    let streams = client.list_streams().await.unwrap();
    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].app, "live");
    assert_eq!(streams[0].stream, "test");
    assert_eq!(streams[0].alive_second, 10);

    zlm.stop().await;
}

#[actix_web::test]
async fn test_list_streams_api_error() {
    let zlm = FakeZlm::spawn(FAILURE, FAILURE);
    let client = zlm.client(Duration::from_secs(5));

    let err = client.list_streams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
    assert!(err.to_string().contains("boom"));

    zlm.stop().await;
}

#[actix_web::test]
async fn test_list_streams_bad_body() {
    let zlm = FakeZlm::spawn("<html>not json</html>", NO_DATA);
    let client = zlm.client(Duration::from_secs(5));

    let err = client.list_streams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);

    zlm.stop().await;
}

#[actix_web::test]
async fn test_list_streams_unreachable() {
    let zlm = FakeZlm::spawn(ONE_STREAM, NO_DATA);
    let client = zlm.client(Duration::from_secs(5));
    zlm.stop().await;

    let err = client.list_streams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[actix_web::test]
async fn test_stream_detail_without_data() {
    let zlm = FakeZlm::spawn(ONE_STREAM, NO_DATA);
    let client = zlm.client(Duration::from_secs(5));

    let detail = client.get_stream_detail("live", "test").await.unwrap();
    assert!(detail.is_none());

    zlm.stop().await;
}

#[actix_web::test]
async fn test_stream_detail_escapes_query() {
    let server = HttpServer::new(|| {
        App::new().route(
            "/index/api/getMediaInfo",
            web::get().to(
                |q: web::Query<HashMap<String, String>>| async move {
                    HttpResponse::Ok().json(serde_json_body(
                        q.get("app").map_or("", String::as_str),
                        q.get("stream").map_or("", String::as_str),
                    ))
                },
            ),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    drop(rt::spawn(server));

    let client =
        ZlmClient::new(format!("http://{addr}"), Duration::from_secs(5));
    let detail = client
        .get_stream_detail("live", "cam&1=a b")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.app, "live");
    assert_eq!(detail.stream, "cam&1=a b");

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_playback_hls() {
    let zlm = FakeZlm::spawn(ONE_STREAM, NO_DATA);
    let client = zlm.client(Duration::from_secs(5));

    let url = client.playback_hls("live", "test").await.unwrap();
    assert_eq!(url, format!("http://{}/live/test/hls/index.m3u8", zlm.addr));

    zlm.stop().await;
}

#[actix_web::test]
async fn test_playback_hls_fails_without_stream() {
    let zlm = FakeZlm::spawn(ONE_STREAM, FAILURE);
    let client = zlm.client(Duration::from_secs(5));

    let err = client.playback_hls("live", "test").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);

    zlm.stop().await;
}

#[actix_web::test]
async fn test_request_timeout() {
    let zlm =
        FakeZlm::spawn_with_delay(ONE_STREAM, NO_DATA, Duration::from_secs(5));
    let client = zlm.client(Duration::from_millis(300));

    let started = Instant::now();
    let err = client.list_streams().await.unwrap_err();
    let elapsed = started.elapsed();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.is_timeout(), "unexpected error: {err}");
    assert!(elapsed >= Duration::from_millis(250), "too early: {elapsed:?}");
    assert!(elapsed < Duration::from_secs(3), "too late: {elapsed:?}");

    zlm.stop().await;
}

/// Spawns a server answering `getMediaList` with the given `status` and
/// `body`.
fn spawn_with_status(
    status: StatusCode,
    body: &'static str,
) -> (SocketAddr, ServerHandle) {
    let server = HttpServer::new(move || {
        App::new().route(
            "/index/api/getMediaList",
            web::get().to(move || async move {
                HttpResponse::build(status)
                    .content_type("application/json")
                    .body(body)
            }),
        )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    drop(rt::spawn(server));
    (addr, handle)
}

#[actix_web::test]
async fn test_error_status_with_envelope() {
    let (addr, handle) = spawn_with_status(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"code":-1,"msg":"boom","data":null}"#,
    );
    let client =
        ZlmClient::new(format!("http://{addr}"), Duration::from_secs(5));

    let err = client.list_streams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Application);
    assert!(err.to_string().contains("boom"), "unexpected error: {err}");

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_error_status_without_envelope() {
    let (addr, handle) =
        spawn_with_status(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
    let client =
        ZlmClient::new(format!("http://{addr}"), Duration::from_secs(5));

    let err = client.list_streams().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("502"), "unexpected error: {err}");

    handle.stop(false).await;
}

fn serde_json_body(app: &str, stream: &str) -> serde_json::Value {
    serde_json::json!({
        "code": 0,
        "msg": "",
        "data": {"app": app, "stream": stream},
    })
}
