#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Live feed connection established.
    FeedOpened,
    /// Live feed closed or failed; there is no reconnect.
    FeedClosed { reason: Option<String> },
    /// One decoded update frame from the live feed.
    UpdateReceived(crate::WireUpdate),
    /// A badge-hide timer fired; hides whatever badge is showing.
    BadgeHideElapsed,
    /// User edited the AI-instructions input.
    InstructionsChanged(String),
    /// User asked to start monitoring.
    StartMonitoringClicked,
    /// User asked to stop monitoring.
    StopMonitoringClicked,
    /// User asked for an immediate video check.
    CheckForChangesClicked,
    /// User asked to save the current AI instructions.
    SaveInstructionsClicked,
    /// User fired one of the backend test hooks.
    TestClicked(TestTarget),
    /// UI/render tick to coalesce rendering.
    Tick,
}

/// Which backend test hook a test key press targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTarget {
    Program,
    Video,
    WorkOrder,
    Feed,
}
