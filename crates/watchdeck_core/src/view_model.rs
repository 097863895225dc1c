use crate::state::{ProgramStatus, VideoCard, WorkOrderCard};

/// Fixed header shown on every work-order card.
pub const WORK_ORDER_HEADER: &str = "Work Order Created";

/// Badge accent. Exactly one applies to a widget at a time, by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Success,
    Warning,
    Secondary,
}

/// Progress-bar treatment for a video card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    /// Work in flight.
    StripedAnimated,
    /// Finished: solid success fill.
    SolidSuccess,
    /// Anything else, including a missing status: solid muted fill.
    SolidMuted,
}

/// Derives the bar and badge styles from a video card's raw status.
pub fn video_styles(status: Option<&str>) -> (BarStyle, BadgeStyle) {
    match status {
        Some("In Progress") => (BarStyle::StripedAnimated, BadgeStyle::Primary),
        Some("Complete") => (BarStyle::SolidSuccess, BadgeStyle::Success),
        _ => (BarStyle::SolidMuted, BadgeStyle::Secondary),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramBadgeView {
    pub text: String,
    pub style: BadgeStyle,
}

impl ProgramBadgeView {
    pub(crate) fn from_status(status: &ProgramStatus) -> Self {
        match status {
            // An absent countdown renders as an explicit sentinel, never
            // an empty pair of parentheses.
            ProgramStatus::Active { countdown } => Self {
                text: format!("Active ({})", countdown.as_deref().unwrap_or("n/a")),
                style: BadgeStyle::Primary,
            },
            ProgramStatus::Processing => Self {
                text: "Processing (Monitoring Paused)".to_string(),
                style: BadgeStyle::Success,
            },
            ProgramStatus::Other(raw) => Self {
                text: raw.clone(),
                style: BadgeStyle::Warning,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntryView {
    pub at: String,
    pub source: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCardView {
    pub key: String,
    pub file: String,
    pub status: String,
    pub stage: String,
    /// Percentage-like label, also the bar fill amount.
    pub progress: String,
    pub bar: BarStyle,
    pub badge: BadgeStyle,
}

impl VideoCardView {
    pub(crate) fn from_card(card: &VideoCard) -> Self {
        let (bar, badge) = video_styles(card.status.as_deref());
        Self {
            key: card.key(),
            file: card.file.clone(),
            status: card.status.clone().unwrap_or_else(|| "Pending".to_string()),
            stage: card.stage.clone().unwrap_or_else(|| "Unknown".to_string()),
            progress: card.progress.clone().unwrap_or_else(|| "N/A".to_string()),
            bar,
            badge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSectionView {
    /// Section-wide status line, set by `level == "Section"` updates.
    pub label: Option<String>,
    pub cards: Vec<VideoCardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderCardView {
    pub key: String,
    pub title: String,
    pub id: String,
    pub analysis: Option<String>,
    /// Decoded JPEG payload; present only when the latest upsert carried one.
    pub image: Option<Vec<u8>>,
}

impl WorkOrderCardView {
    pub(crate) fn from_card(card: &WorkOrderCard) -> Self {
        Self {
            key: card.key(),
            title: card.title.clone(),
            id: card.id.clone(),
            analysis: card.analysis.clone(),
            image: card.image.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderSectionView {
    pub cards: Vec<WorkOrderCardView>,
}

/// Render-facing snapshot of the dashboard. Sections stay `None` until
/// their first message and the renderer hides them while `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashViewModel {
    pub program: Option<ProgramBadgeView>,
    pub temp_badge: Option<String>,
    pub feed: Vec<FeedEntryView>,
    pub video_section: Option<VideoSectionView>,
    pub work_order_section: Option<WorkOrderSectionView>,
    pub instructions: String,
}
