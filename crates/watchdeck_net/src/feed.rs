use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use deck_logging::deck_warn;
use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use url::Url;
use watchdeck_core::WireUpdate;

use crate::FeedEvent;

/// Handle to the single live feed connection.
///
/// The connection lives on its own thread with its own runtime; events
/// arrive over a channel. The handle is one-shot for the session: after
/// [`FeedEvent::Closed`] nothing reconnects and nothing more arrives.
pub struct FeedHandle {
    event_rx: mpsc::Receiver<FeedEvent>,
}

impl FeedHandle {
    /// Opens the connection. Connect failures surface as an immediate
    /// `Closed` event rather than an error return, so the caller's event
    /// loop has only one shape.
    pub fn connect(url: Url) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = event_tx.send(FeedEvent::Closed {
                        reason: Some(err.to_string()),
                    });
                    return;
                }
            };
            runtime.block_on(run_feed(url, event_tx));
        });
        Self { event_rx }
    }

    /// Blocks for the next event; `None` once the connection thread is done.
    pub fn recv(&self) -> Option<FeedEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<FeedEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<FeedEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_feed(url: Url, event_tx: mpsc::Sender<FeedEvent>) {
    let (mut stream, _response) = match connect_async(url.as_str()).await {
        Ok(pair) => pair,
        Err(err) => {
            deck_warn!("feed connect to {url} failed: {err}");
            let _ = event_tx.send(FeedEvent::Closed {
                reason: Some(err.to_string()),
            });
            return;
        }
    };

    let _ = event_tx.send(FeedEvent::Opened);

    while let Some(item) = stream.next().await {
        match item {
            Ok(Message::Text(text)) => match decode_frame(text.as_str()) {
                Ok(update) => {
                    let _ = event_tx.send(FeedEvent::Update(update));
                }
                // Malformed frames are fatal to that frame only.
                Err(err) => deck_warn!("dropping undecodable feed frame: {err}"),
            },
            Ok(Message::Close(_)) => break,
            // Pings and pongs are handled by the library; binary frames are
            // not part of the protocol.
            Ok(_) => {}
            Err(err) => {
                let _ = event_tx.send(FeedEvent::Closed {
                    reason: Some(err.to_string()),
                });
                return;
            }
        }
    }

    let _ = event_tx.send(FeedEvent::Closed { reason: None });
}

/// Decodes one inbound text frame into a wire update.
pub fn decode_frame(text: &str) -> Result<WireUpdate, serde_json::Error> {
    serde_json::from_str(text)
}
