use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use watchdeck_core::{Effect, Msg};
use watchdeck_net::CommandHandle;

/// Executes effects produced by the update function.
pub struct EffectRunner {
    commands: CommandHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(commands: CommandHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { commands, msg_tx }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendCommand(command) => self.commands.dispatch(command),
                Effect::ScheduleBadgeHide { delay_ms } => self.schedule_badge_hide(delay_ms),
            }
        }
    }

    /// One one-shot timer per request, no cancellation token: with
    /// overlapping badges the earliest timer hides whatever is showing.
    fn schedule_badge_hide(&self, delay_ms: u64) {
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(delay_ms));
            let _ = msg_tx.send(Msg::BadgeHideElapsed);
        });
    }

    /// Drains queued command outcomes. The handle already logged them;
    /// nothing in the UI reacts to a response body.
    pub fn pump_outcomes(&self) {
        while self.commands.try_recv().is_some() {}
    }
}
