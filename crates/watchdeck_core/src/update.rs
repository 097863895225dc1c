use base64::Engine as _;
use deck_logging::{deck_info, deck_warn};

use crate::{
    classify, Command, DashState, Effect, FeedEntry, Msg, ProgramStatus, TestTarget, UnknownKind,
    Update, BADGE_HIDE_MS,
};

/// Source label attached to locally generated feed receipts.
const LOCAL_SOURCE: &str = "dashboard";

/// Pure update function: applies a message to state and returns any effects.
///
/// `now` is the caller-stamped local wall-clock time used for feed entries,
/// so the state machine itself never reads a clock.
pub fn update(mut state: DashState, msg: Msg, now: &str) -> (DashState, Vec<Effect>) {
    let effects = match msg {
        Msg::FeedOpened => {
            deck_info!("status feed connected");
            Vec::new()
        }
        Msg::FeedClosed { reason } => {
            // Best-effort delivery only: the feed is one-shot for the
            // session, so connection loss is logged and nothing more.
            deck_warn!(
                "status feed closed ({})",
                reason.as_deref().unwrap_or("no reason given")
            );
            Vec::new()
        }
        Msg::UpdateReceived(wire) => apply_update(&mut state, wire, now),
        Msg::BadgeHideElapsed => {
            state.hide_temp_badge();
            Vec::new()
        }
        Msg::InstructionsChanged(text) => {
            state.set_instructions(text);
            Vec::new()
        }
        Msg::StartMonitoringClicked => {
            send_with_receipt(&mut state, Command::StartMonitoring, "Monitoring Started", now)
        }
        Msg::StopMonitoringClicked => {
            send_with_receipt(&mut state, Command::StopMonitoring, "Monitoring Stopped", now)
        }
        Msg::CheckForChangesClicked => {
            send_with_receipt(&mut state, Command::VideoCheck, "Video Check Requested", now)
        }
        Msg::SaveInstructionsClicked => {
            let instructions = state.instructions().to_string();
            send_with_receipt(
                &mut state,
                Command::SaveInstructions { instructions },
                "AI Instructions Updated",
                now,
            )
        }
        Msg::TestClicked(target) => {
            // Test hooks are pure triggers; any visible effect arrives back
            // over the live feed.
            vec![Effect::SendCommand(test_command(target))]
        }
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}

/// Sends a command and optimistically records a local feed receipt without
/// waiting for the backend to confirm anything.
fn send_with_receipt(
    state: &mut DashState,
    command: Command,
    receipt: &str,
    now: &str,
) -> Vec<Effect> {
    state.push_feed(FeedEntry {
        at: now.to_string(),
        source: LOCAL_SOURCE.to_string(),
        message: receipt.to_string(),
    });
    vec![Effect::SendCommand(command)]
}

fn test_command(target: TestTarget) -> Command {
    match target {
        TestTarget::Program => Command::TestProgramStatus,
        TestTarget::Video => Command::TestVideoStatus,
        TestTarget::WorkOrder => Command::TestWorkOrderStatus,
        TestTarget::Feed => Command::TestFeedStatus,
    }
}

/// Routes one inbound update. A missing required field aborts that message
/// only: a warning is logged and nothing is mutated.
fn apply_update(state: &mut DashState, wire: crate::WireUpdate, now: &str) -> Vec<Effect> {
    let update = match classify(wire) {
        Ok(update) => update,
        Err(UnknownKind(kind)) => {
            deck_warn!("dropping update with unknown type {kind:?}");
            return Vec::new();
        }
    };

    match update {
        Update::Feed { message, source } => {
            let Some(message) = message else {
                deck_warn!("feed update without a message; skipping");
                return Vec::new();
            };
            state.push_feed(FeedEntry {
                at: now.to_string(),
                source: source.unwrap_or_else(|| "unknown".to_string()),
                message,
            });
            Vec::new()
        }
        Update::Temp { message } => {
            let Some(message) = message else {
                deck_warn!("temp update without a message; skipping");
                return Vec::new();
            };
            state.show_temp_badge(message);
            vec![Effect::ScheduleBadgeHide {
                delay_ms: BADGE_HIDE_MS,
            }]
        }
        Update::Video {
            level,
            message,
            status,
            details,
        } => {
            if level.as_deref() == Some("Section") {
                let Some(message) = message else {
                    deck_warn!("section-level video update without a message; skipping");
                    return Vec::new();
                };
                state.set_video_section_label(message);
            } else {
                let Some(file) = details.video_file else {
                    deck_warn!("video update without video_file; skipping");
                    return Vec::new();
                };
                state.upsert_video(file, status, details.stage, details.progress);
            }
            Vec::new()
        }
        Update::WorkOrder { message, details } => {
            let Some(message) = message else {
                deck_warn!("work order update without a message; skipping");
                return Vec::new();
            };
            let Some(id) = details.work_order_id else {
                deck_warn!("work order update without work_order_id; skipping");
                return Vec::new();
            };
            let image = details.image_base64.as_deref().and_then(decode_image);
            state.upsert_work_order(id, message, details.ai_analysis, image);
            Vec::new()
        }
        Update::Program { status, countdown } => {
            let Some(status) = status else {
                deck_warn!("program update without a status; skipping");
                return Vec::new();
            };
            let status = match status.as_str() {
                "Active" => ProgramStatus::Active {
                    countdown: countdown.map(|c| c.to_string()),
                },
                "Processing" => ProgramStatus::Processing,
                _ => ProgramStatus::Other(status),
            };
            state.set_program(status);
            Vec::new()
        }
    }
}

/// Decodes the inline JPEG payload; a bad payload drops the image only,
/// not the whole card.
fn decode_image(encoded: &str) -> Option<Vec<u8>> {
    match base64::engine::general_purpose::STANDARD.decode(encoded) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            deck_warn!("discarding undecodable work order image: {err}");
            None
        }
    }
}
