use std::fmt;

use serde::Deserialize;

/// One inbound update as it arrives on the live feed.
///
/// Every field except `type` is optional on the wire; each handler enforces
/// its own required fields and aborts that message when one is missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WireUpdate {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub details: Option<WireDetails>,
}

/// Nested payload whose shape depends on the update kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct WireDetails {
    #[serde(default)]
    pub video_file: Option<String>,
    #[serde(default)]
    pub progress: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub work_order_id: Option<String>,
    #[serde(default)]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub countdown: Option<Countdown>,
}

/// Program countdown; the backend sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Countdown {
    Seconds(i64),
    Text(String),
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Seconds(n) => write!(f, "{n}"),
            Countdown::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A classified update, ready for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    Feed {
        message: Option<String>,
        source: Option<String>,
    },
    Temp {
        message: Option<String>,
    },
    Video {
        level: Option<String>,
        message: Option<String>,
        status: Option<String>,
        details: WireDetails,
    },
    WorkOrder {
        message: Option<String>,
        details: WireDetails,
    },
    Program {
        status: Option<String>,
        countdown: Option<Countdown>,
    },
}

/// Discriminant value that matched no known update kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

/// Turns a raw wire record into a routed [`Update`].
///
/// Matching is exact and case-sensitive; any other tag is reported so the
/// caller can log it and drop the message.
pub fn classify(wire: WireUpdate) -> Result<Update, UnknownKind> {
    let WireUpdate {
        kind,
        message,
        source,
        status,
        level,
        details,
    } = wire;
    let details = details.unwrap_or_default();

    match kind.as_str() {
        "Feed" => Ok(Update::Feed { message, source }),
        "Temp" => Ok(Update::Temp { message }),
        "Video" => Ok(Update::Video {
            level,
            message,
            status,
            details,
        }),
        "WorkOrder" => Ok(Update::WorkOrder { message, details }),
        "Program" => Ok(Update::Program {
            status,
            countdown: details.countdown,
        }),
        _ => Err(UnknownKind(kind)),
    }
}
