use pretty_assertions::assert_eq;
use url::Url;
use watchdeck_net::{feed_url, EndpointError, FEED_PATH};

#[test]
fn http_base_feeds_over_ws() {
    let base = Url::parse("http://dash.example.com:8000/").unwrap();
    let url = feed_url(&base).expect("derivable");
    assert_eq!(url.as_str(), "ws://dash.example.com:8000/ws/status-updates");
}

#[test]
fn https_base_feeds_over_wss() {
    let base = Url::parse("https://dash.example.com/").unwrap();
    let url = feed_url(&base).expect("derivable");
    assert_eq!(url.as_str(), "wss://dash.example.com/ws/status-updates");
}

#[test]
fn existing_path_and_query_are_replaced() {
    let base = Url::parse("http://localhost:8000/index.html?tab=videos").unwrap();
    let url = feed_url(&base).expect("derivable");
    assert_eq!(url.path(), FEED_PATH);
    assert_eq!(url.query(), None);
}

#[test]
fn ws_base_is_passed_through() {
    let base = Url::parse("ws://localhost:9000/").unwrap();
    let url = feed_url(&base).expect("derivable");
    assert_eq!(url.as_str(), "ws://localhost:9000/ws/status-updates");
}

#[test]
fn non_http_scheme_is_rejected() {
    let base = Url::parse("ftp://dash.example.com/").unwrap();
    assert_eq!(
        feed_url(&base),
        Err(EndpointError::UnsupportedScheme("ftp".to_string()))
    );
}
