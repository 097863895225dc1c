/// How long the transient badge stays visible, in milliseconds.
pub const BADGE_HIDE_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fire-and-forget backend command; the runner logs the outcome.
    SendCommand(Command),
    /// Arrange for `Msg::BadgeHideElapsed` after the delay.
    ScheduleBadgeHide { delay_ms: u64 },
}

/// An outbound backend command. All commands POST; only
/// [`Command::SaveInstructions`] carries a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartMonitoring,
    StopMonitoring,
    VideoCheck,
    SaveInstructions { instructions: String },
    TestProgramStatus,
    TestVideoStatus,
    TestWorkOrderStatus,
    TestFeedStatus,
}

impl Command {
    /// Backend path for this command, relative to the base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Command::StartMonitoring => "/start-monitoring",
            Command::StopMonitoring => "/stop-monitoring",
            Command::VideoCheck => "/video-check",
            Command::SaveInstructions { .. } => "/save-ai-instructions",
            Command::TestProgramStatus => "/test-program-status",
            Command::TestVideoStatus => "/test-video-status",
            Command::TestWorkOrderStatus => "/test-wo-status",
            Command::TestFeedStatus => "/test-feed-status",
        }
    }
}
