use crate::view_model::{
    DashViewModel, FeedEntryView, ProgramBadgeView, VideoCardView, VideoSectionView,
    WorkOrderCardView, WorkOrderSectionView,
};

/// One entry in the status feed. Entries are immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub at: String,
    pub source: String,
    pub message: String,
}

/// One tracked video file, keyed by its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub file: String,
    pub status: Option<String>,
    pub stage: Option<String>,
    pub progress: Option<String>,
}

impl VideoCard {
    /// Stable composite identity, `video-<file>`.
    pub fn key(&self) -> String {
        format!("video-{}", self.file)
    }
}

/// One tracked work order, keyed by its backend id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkOrderCard {
    pub id: String,
    pub title: String,
    pub analysis: Option<String>,
    /// Decoded JPEG bytes, replaced wholesale on every upsert.
    pub image: Option<Vec<u8>>,
}

impl WorkOrderCard {
    /// Stable composite identity, `wo-<id>`.
    pub fn key(&self) -> String {
        format!("wo-{}", self.id)
    }
}

/// Last reported program status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramStatus {
    Active { countdown: Option<String> },
    Processing,
    Other(String),
}

/// Whole-dashboard state. Mutated only through [`crate::update`]; rendered
/// through [`DashState::view`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashState {
    program: Option<ProgramStatus>,
    temp_badge: Option<String>,
    feed: Vec<FeedEntry>,
    video_section_visible: bool,
    video_section_label: Option<String>,
    video_cards: Vec<VideoCard>,
    work_order_section_visible: bool,
    work_orders: Vec<WorkOrderCard>,
    instructions: String,
    dirty: bool,
}

impl DashState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects the state into its render-facing view model.
    pub fn view(&self) -> DashViewModel {
        DashViewModel {
            program: self.program.as_ref().map(ProgramBadgeView::from_status),
            temp_badge: self.temp_badge.clone(),
            feed: self
                .feed
                .iter()
                .map(|entry| FeedEntryView {
                    at: entry.at.clone(),
                    source: entry.source.clone(),
                    message: entry.message.clone(),
                })
                .collect(),
            video_section: self.video_section_visible.then(|| VideoSectionView {
                label: self.video_section_label.clone(),
                cards: self.video_cards.iter().map(VideoCardView::from_card).collect(),
            }),
            work_order_section: self.work_order_section_visible.then(|| WorkOrderSectionView {
                cards: self
                    .work_orders
                    .iter()
                    .map(WorkOrderCardView::from_card)
                    .collect(),
            }),
            instructions: self.instructions.clone(),
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub(crate) fn set_instructions(&mut self, text: String) {
        self.instructions = text;
        // The input is echoed by the renderer, so edits are render-worthy.
        self.dirty = true;
    }

    pub(crate) fn set_program(&mut self, status: ProgramStatus) {
        self.program = Some(status);
        self.dirty = true;
    }

    pub(crate) fn show_temp_badge(&mut self, message: String) {
        self.temp_badge = Some(message);
        self.dirty = true;
    }

    /// Unconditional hide: a timer scheduled for an older message will also
    /// hide a newer one.
    pub(crate) fn hide_temp_badge(&mut self) {
        if self.temp_badge.take().is_some() {
            self.dirty = true;
        }
    }

    /// Prepends an entry: the feed is newest-first and unbounded.
    pub(crate) fn push_feed(&mut self, entry: FeedEntry) {
        self.feed.insert(0, entry);
        self.dirty = true;
    }

    pub(crate) fn set_video_section_label(&mut self, label: String) {
        self.video_section_visible = true;
        self.video_section_label = Some(label);
        self.dirty = true;
    }

    /// Create-if-absent, else update-in-place. At most one card exists per
    /// file; insertion order is preserved and cards are never removed.
    pub(crate) fn upsert_video(
        &mut self,
        file: String,
        status: Option<String>,
        stage: Option<String>,
        progress: Option<String>,
    ) {
        self.video_section_visible = true;
        match self.video_cards.iter_mut().find(|card| card.file == file) {
            Some(card) => {
                card.status = status;
                card.stage = stage;
                card.progress = progress;
            }
            None => self.video_cards.push(VideoCard {
                file,
                status,
                stage,
                progress,
            }),
        }
        self.dirty = true;
    }

    /// Upsert by `work_order_id` for both lookup and creation.
    pub(crate) fn upsert_work_order(
        &mut self,
        id: String,
        title: String,
        analysis: Option<String>,
        image: Option<Vec<u8>>,
    ) {
        self.work_order_section_visible = true;
        match self.work_orders.iter_mut().find(|card| card.id == id) {
            Some(card) => {
                card.title = title;
                card.analysis = analysis;
                card.image = image;
            }
            None => self.work_orders.push(WorkOrderCard {
                id,
                title,
                analysis,
                image,
            }),
        }
        self.dirty = true;
    }
}
