use std::sync::Arc;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use url::Url;
use watchdeck_core::Command;
use watchdeck_net::{
    CommandError, CommandHandle, CommandSender, CommandSettings, ReqwestCommandSender,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sender_for(server: &MockServer) -> ReqwestCommandSender {
    let base = Url::parse(&server.uri()).expect("mock server uri");
    ReqwestCommandSender::new(base, CommandSettings::default()).expect("build sender")
}

#[tokio::test]
async fn save_instructions_posts_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save-ai-instructions"))
        .and(body_json(serde_json::json!({
            "instructions": "inspect hourly"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "saved"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sender = sender_for(&server);
    let result = sender
        .send(&Command::SaveInstructions {
            instructions: "inspect hourly".to_string(),
        })
        .await
        .expect("command ok");

    assert_eq!(result, serde_json::json!({ "status": "saved" }));
}

#[tokio::test]
async fn each_command_posts_to_its_endpoint() {
    let server = MockServer::start().await;
    let commands = [
        (Command::StartMonitoring, "/start-monitoring"),
        (Command::StopMonitoring, "/stop-monitoring"),
        (Command::VideoCheck, "/video-check"),
        (Command::TestProgramStatus, "/test-program-status"),
        (Command::TestVideoStatus, "/test-video-status"),
        (Command::TestWorkOrderStatus, "/test-wo-status"),
        (Command::TestFeedStatus, "/test-feed-status"),
    ];

    for (_, endpoint) in &commands {
        Mock::given(method("POST"))
            .and(path(*endpoint))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let sender = sender_for(&server);
    for (command, endpoint) in commands {
        assert_eq!(command.endpoint(), endpoint);
        sender.send(&command).await.expect("command ok");
    }
}

#[tokio::test]
async fn http_error_status_is_reported_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/video-check"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let sender = sender_for(&server);
    let err = sender.send(&Command::VideoCheck).await.unwrap_err();
    assert_eq!(err, CommandError::HttpStatus(500));
}

#[tokio::test]
async fn non_json_response_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start-monitoring"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let sender = sender_for(&server);
    let err = sender.send(&Command::StartMonitoring).await.unwrap_err();
    assert!(matches!(err, CommandError::NonJsonResponse(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on the discard port.
    let base = Url::parse("http://127.0.0.1:9").expect("static url");
    let settings = CommandSettings {
        connect_timeout: Duration::from_millis(200),
        request_timeout: Duration::from_millis(500),
    };
    let sender = ReqwestCommandSender::new(base, settings).expect("build sender");

    let err = sender.send(&Command::StopMonitoring).await.unwrap_err();
    assert!(matches!(
        err,
        CommandError::Network(_) | CommandError::Timeout
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn handle_dispatches_fire_and_forget_and_queues_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/start-monitoring"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let handle = CommandHandle::new(Arc::new(sender_for(&server)));
    handle.dispatch(Command::StartMonitoring);

    let deadline = Instant::now() + Duration::from_secs(5);
    let outcome = loop {
        if let Some(outcome) = handle.try_recv() {
            break outcome;
        }
        assert!(Instant::now() < deadline, "no outcome within deadline");
        tokio::time::sleep(Duration::from_millis(20)).await;
    };

    assert_eq!(outcome.endpoint, "/start-monitoring");
    assert_eq!(outcome.result, Ok(serde_json::json!({ "ok": true })));
}
