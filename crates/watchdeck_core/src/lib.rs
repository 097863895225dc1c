//! Watchdeck core: pure update routing and card-store state machine.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;
mod wire;

pub use effect::{Command, Effect, BADGE_HIDE_MS};
pub use msg::{Msg, TestTarget};
pub use state::{DashState, FeedEntry, ProgramStatus, VideoCard, WorkOrderCard};
pub use update::update;
pub use view_model::{
    video_styles, BadgeStyle, BarStyle, DashViewModel, FeedEntryView, ProgramBadgeView,
    VideoCardView, VideoSectionView, WorkOrderCardView, WorkOrderSectionView, WORK_ORDER_HEADER,
};
pub use wire::{classify, Countdown, UnknownKind, Update, WireDetails, WireUpdate};
