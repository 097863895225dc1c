//! Watchdeck net: live-feed connection and outbound command IO.
mod commands;
mod endpoint;
mod feed;
mod types;

pub use commands::{
    CommandHandle, CommandOutcome, CommandSender, CommandSettings, ReqwestCommandSender,
};
pub use endpoint::{feed_url, FEED_PATH};
pub use feed::{decode_frame, FeedHandle};
pub use types::{CommandError, EndpointError, FeedEvent};
