use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use chrono::{TimeZone, Utc};

use maclookup::{Client, Error};

const RATE_HEADERS: [(&str, &str); 3] = [
    ("x-ratelimit-limit", "2, 2;window=1"),
    ("x-ratelimit-remaining", "0"),
    ("x-ratelimit-reset", "1696579200"),
];

const GOOD_BODY: &str = r#"{"success":true,"found":true,"macPrefix":"000000","company":"XEROX CORPORATION","address":"M/S 105-50C, WEBSTER NY 14580, US","country":"US","blockStart":"000000000000","blockEnd":"000000FFFFFF","blockSize":16777215,"blockType":"MA-L","updated":"2015-11-17","isRand":false,"isPrivate":false}"#;

/// Binds a stub API server on an ephemeral port and returns the bare
/// `host:port` prefix, which the client should infer as `http://`.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("127.0.0.1:{}", addr.port())
}

#[tokio::test]
async fn lookup_good_response() {
    // Registered at the normalized path only, so this also checks
    // that the client strips separators before building the URL.
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async { (RATE_HEADERS, GOOD_BODY) }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let resp = client.lookup("00:00:00").await.unwrap();

    assert!(resp.info.found);
    assert_eq!(resp.info.mac_prefix, "000000");
    assert_eq!(resp.info.company, "XEROX CORPORATION");
    assert_eq!(resp.info.country, "US");
    assert_eq!(resp.info.block_start, "000000000000");
    assert_eq!(resp.info.block_end, "000000FFFFFF");
    assert_eq!(resp.info.block_size, 16777215);
    assert_eq!(resp.info.block_type, "MA-L");
    assert_eq!(resp.info.updated, "2015-11-17");
    assert!(!resp.info.is_rand);
    assert!(!resp.info.is_private);

    assert_eq!(resp.rate_limit.limit, 2);
    assert_eq!(resp.rate_limit.remaining, 0);
    assert_eq!(resp.rate_limit.reset, Utc.timestamp_opt(1696579200, 0).unwrap());
    assert!(resp.response_time > Duration::ZERO);
}

#[tokio::test]
async fn lookup_prefix_not_found() {
    let app = Router::new().route(
        "/v2/macs/FFFFFF",
        get(|| async { r#"{"success":true,"found":false,"isRand":false}"# }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let resp = client.lookup("ff-ff-ff").await.unwrap();

    assert!(!resp.info.found);
    assert_eq!(resp.info.company, "");
    assert_eq!(resp.info.mac_prefix, "");
    assert_eq!(resp.info.block_size, 0);
    assert!(!resp.info.is_private);
}

#[tokio::test]
async fn lookup_bad_request() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                r#"{"success":false,"error":"Invalid MAC or OUI format","errorCode":422}"#,
            )
        }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::BadRequest { message, .. } => assert_eq!(message, "invalid mac or oui format"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_bad_request_undecodable_body() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async { (StatusCode::BAD_REQUEST, "nope") }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::BadRequest { message, .. } => assert_eq!(message, "client request error"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_bad_api_key() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                r#"{"success":false,"error":"Bad API key","errorCode":401}"#,
            )
        }),
    );
    let client = Client::new()
        .with_prefix_uri(&serve(app).await)
        .with_api_key("wrong");

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::BadApiKey { message, .. } => assert_eq!(message, "Bad API key"),
        other => panic!("expected BadApiKey, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_rate_limit_exceeded() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async { (StatusCode::TOO_MANY_REQUESTS, RATE_HEADERS, "") }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match &err {
        Error::RateLimitExceeded { rate_limit } => {
            assert_eq!(rate_limit.limit, 2);
            assert_eq!(rate_limit.remaining, 0);
            assert_eq!(rate_limit.reset, Utc.timestamp_opt(1696579200, 0).unwrap());
        }
        other => panic!("expected RateLimitExceeded, got {other:?}"),
    }
    // The snapshot is also reachable without matching the variant.
    assert_eq!(err.rate_limit().unwrap().limit, 2);
}

#[tokio::test]
async fn lookup_malformed_body() {
    let app = Router::new().route("/v2/macs/000000", get(|| async { "not json" }));
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::MalformedResponse { source, .. } => assert!(source.is_some()),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_success_false() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async { r#"{"success":false,"found":false}"# }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::MalformedResponse { source, .. } => assert!(source.is_none()),
        other => panic!("expected MalformedResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_unexpected_status() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::Transport { message, .. } => assert_eq!(message, "unexpected http status: 500"),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_404_is_not_special_cased() {
    // Unlike the company-name endpoint, 404 here is just another
    // unexpected status.
    let app = Router::new();
    let client = Client::new().with_prefix_uri(&serve(app).await);

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::Transport { message, .. } => assert_eq!(message, "unexpected http status: 404"),
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_timeout() {
    let app = Router::new().route(
        "/v2/macs/000000",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            GOOD_BODY
        }),
    );
    let client = Client::new()
        .with_prefix_uri(&serve(app).await)
        .with_timeout(Duration::from_millis(5));

    let err = client.lookup("000000").await.unwrap_err();
    match err {
        Error::Transport {
            source, rate_limit, ..
        } => {
            assert!(source.unwrap().is_timeout());
            assert!(rate_limit.is_none());
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_sends_identifying_headers() {
    use axum::http::HeaderMap;

    let app = Router::new().route(
        "/v2/macs/000000",
        get(|headers: HeaderMap| async move {
            let ua = headers
                .get("user-agent")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            let accept = headers
                .get("accept")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            if ua.starts_with("MacLookupClient/") && accept == "*" {
                (StatusCode::OK, GOOD_BODY).into_response()
            } else {
                (StatusCode::IM_A_TEAPOT, "").into_response()
            }
        }),
    );
    let client = Client::new().with_prefix_uri(&serve(app).await);

    assert!(client.lookup("000000").await.is_ok());
}
