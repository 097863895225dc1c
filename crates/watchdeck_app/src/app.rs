use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context as _;
use chrono::Local;
use deck_logging::deck_info;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::Terminal;
use watchdeck_core::{update, DashState, Msg, TestTarget};
use watchdeck_net::{
    feed_url, CommandHandle, CommandSettings, FeedEvent, FeedHandle, ReqwestCommandSender,
};

use crate::effects::EffectRunner;
use crate::ui::{self, keys};
use crate::Args;

/// How long to wait for terminal input before draining the message queue.
const INPUT_POLL: Duration = Duration::from_millis(75);

pub fn run(args: Args) -> anyhow::Result<()> {
    // One feed handle and one command handle per run: singleton
    // initialization holds by construction.
    let feed = FeedHandle::connect(feed_url(&args.base_url)?);
    let sender = ReqwestCommandSender::new(args.base_url.clone(), CommandSettings::default())
        .context("build command sender")?;
    let commands = CommandHandle::new(Arc::new(sender));

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    spawn_feed_pump(feed, msg_tx.clone());
    let runner = EffectRunner::new(commands, msg_tx);

    deck_info!("watchdeck starting against {}", args.base_url);

    let mut terminal = setup_terminal().context("set up terminal")?;
    let result = event_loop(&mut terminal, &msg_rx, &runner);
    restore_terminal(&mut terminal).context("restore terminal")?;
    result
}

/// Forwards live-feed events into the message queue until the feed dies.
/// The feed is one-shot; when it closes this thread simply ends.
fn spawn_feed_pump(feed: FeedHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = feed.recv() {
            let msg = match event {
                FeedEvent::Opened => Msg::FeedOpened,
                FeedEvent::Update(wire) => Msg::UpdateReceived(wire),
                FeedEvent::Closed { reason } => Msg::FeedClosed { reason },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn setup_terminal() -> anyhow::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Tui) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn event_loop(
    terminal: &mut Tui,
    msg_rx: &mpsc::Receiver<Msg>,
    runner: &EffectRunner,
) -> anyhow::Result<()> {
    let mut state = DashState::new();
    let mut editing = false;
    terminal.draw(|frame| ui::render(frame, &state.view(), editing))?;

    loop {
        // Apply everything queued before looking at the keyboard, so a
        // burst of feed messages collapses into one redraw.
        while let Ok(msg) = msg_rx.try_recv() {
            state = apply(state, msg, runner);
        }
        runner.pump_outcomes();

        let mut force_redraw = false;
        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match on_key(key, &mut editing, &state) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Dispatch(msg) => state = apply(state, msg, runner),
                        KeyAction::Redraw => force_redraw = true,
                        KeyAction::None => {}
                    }
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        }

        if state.consume_dirty() || force_redraw {
            terminal.draw(|frame| ui::render(frame, &state.view(), editing))?;
        }
    }
}

fn apply(state: DashState, msg: Msg, runner: &EffectRunner) -> DashState {
    let now = Local::now().format("%H:%M:%S").to_string();
    let (state, effects) = update(state, msg, &now);
    runner.run(effects);
    state
}

enum KeyAction {
    None,
    Quit,
    Redraw,
    Dispatch(Msg),
}

fn on_key(key: KeyEvent, editing: &mut bool, state: &DashState) -> KeyAction {
    if *editing {
        return match key.code {
            KeyCode::Enter => {
                *editing = false;
                KeyAction::Dispatch(Msg::SaveInstructionsClicked)
            }
            KeyCode::Esc => {
                *editing = false;
                KeyAction::Redraw
            }
            KeyCode::Backspace => {
                let mut text = state.instructions().to_string();
                text.pop();
                KeyAction::Dispatch(Msg::InstructionsChanged(text))
            }
            KeyCode::Char(c) => {
                let mut text = state.instructions().to_string();
                text.push(c);
                KeyAction::Dispatch(Msg::InstructionsChanged(text))
            }
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char(keys::QUIT) => KeyAction::Quit,
        KeyCode::Char(keys::START_MONITORING) => KeyAction::Dispatch(Msg::StartMonitoringClicked),
        KeyCode::Char(keys::STOP_MONITORING) => KeyAction::Dispatch(Msg::StopMonitoringClicked),
        KeyCode::Char(keys::CHECK_FOR_CHANGES) => {
            KeyAction::Dispatch(Msg::CheckForChangesClicked)
        }
        KeyCode::Char(keys::EDIT_INSTRUCTIONS) => {
            *editing = true;
            KeyAction::Redraw
        }
        KeyCode::Char(keys::TEST_PROGRAM) => {
            KeyAction::Dispatch(Msg::TestClicked(TestTarget::Program))
        }
        KeyCode::Char(keys::TEST_VIDEO) => KeyAction::Dispatch(Msg::TestClicked(TestTarget::Video)),
        KeyCode::Char(keys::TEST_WORK_ORDER) => {
            KeyAction::Dispatch(Msg::TestClicked(TestTarget::WorkOrder))
        }
        KeyCode::Char(keys::TEST_FEED) => KeyAction::Dispatch(Msg::TestClicked(TestTarget::Feed)),
        _ => KeyAction::None,
    }
}
