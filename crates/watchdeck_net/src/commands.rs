use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_logging::{deck_debug, deck_warn};
use reqwest::header::CONTENT_TYPE;
use url::Url;
use watchdeck_core::Command;

use crate::CommandError;

#[derive(Debug, Clone)]
pub struct CommandSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Sends one backend command and returns the parsed JSON response.
///
/// Callers that fire-and-forget still get a `Result` they can choose to
/// ignore; tests assert on the failure paths directly.
#[async_trait::async_trait]
pub trait CommandSender: Send + Sync {
    async fn send(&self, command: &Command) -> Result<serde_json::Value, CommandError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCommandSender {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestCommandSender {
    pub fn new(base: Url, settings: CommandSettings) -> Result<Self, CommandError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CommandError::Network(err.to_string()))?;
        Ok(Self { base, client })
    }

    fn endpoint_url(&self, command: &Command) -> Result<Url, CommandError> {
        self.base
            .join(command.endpoint())
            .map_err(|err| CommandError::InvalidEndpoint(err.to_string()))
    }
}

#[async_trait::async_trait]
impl CommandSender for ReqwestCommandSender {
    async fn send(&self, command: &Command) -> Result<serde_json::Value, CommandError> {
        let url = self.endpoint_url(command)?;

        // All commands POST with a JSON content type; only SaveInstructions
        // carries a body.
        let request = match command {
            Command::SaveInstructions { instructions } => self
                .client
                .post(url)
                .json(&serde_json::json!({ "instructions": instructions })),
            _ => self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/json"),
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CommandError::HttpStatus(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| CommandError::NonJsonResponse(err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CommandError {
    if err.is_timeout() {
        return CommandError::Timeout;
    }
    CommandError::Network(err.to_string())
}

/// What became of one dispatched command.
#[derive(Debug)]
pub struct CommandOutcome {
    pub endpoint: &'static str,
    pub result: Result<serde_json::Value, CommandError>,
}

/// Fire-and-forget dispatcher over a thread-owned runtime.
///
/// Responses are parsed, logged and queued as [`CommandOutcome`]s; no UI
/// update is ever driven by them, and nothing retries.
pub struct CommandHandle {
    cmd_tx: mpsc::Sender<Command>,
    outcome_rx: mpsc::Receiver<CommandOutcome>,
}

impl CommandHandle {
    pub fn new(sender: Arc<dyn CommandSender>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let sender = sender.clone();
                let outcome_tx = outcome_tx.clone();
                runtime.spawn(async move {
                    let endpoint = command.endpoint();
                    let result = sender.send(&command).await;
                    match &result {
                        Ok(body) => deck_debug!("{endpoint} responded: {body}"),
                        Err(err) => deck_warn!("{endpoint} failed: {err}"),
                    }
                    let _ = outcome_tx.send(CommandOutcome { endpoint, result });
                });
            }
        });

        Self { cmd_tx, outcome_rx }
    }

    /// Queues a command; the outcome is logged and retrievable, never
    /// awaited.
    pub fn dispatch(&self, command: Command) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<CommandOutcome> {
        self.outcome_rx.try_recv().ok()
    }
}
