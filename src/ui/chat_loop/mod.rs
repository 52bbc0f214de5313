//! Interactive chat loop.
//!
//! One task owns the [`SessionStore`] and applies every mutation: key presses
//! from the terminal reader and replies from the simulator arrive on channels
//! and are handled in the order they are received.

pub mod keybindings;
pub mod lifecycle;

use std::error::Error;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::reply::ResolvedReply;
use crate::core::session::{SessionStore, SubmitOutcome};
use crate::core::settings::SessionSettings;
use crate::ui::composer::Composer;
use crate::ui::renderer::{self, Header};
use keybindings::{map_key, KeyAction};
use lifecycle::{restore_terminal, setup_terminal, ChatTerminal};

const INDICATOR_TICK: Duration = Duration::from_millis(100);

pub enum ChatAction {
    Key(KeyAction),
    Paste(String),
    ReplyResolved(ResolvedReply),
}

pub struct ChatState {
    pub store: SessionStore,
    pub composer: Composer,
    title: String,
    subtitle: String,
    started_at: Instant,
    exit_requested: bool,
}

impl ChatState {
    pub fn new(settings: &SessionSettings, store: SessionStore) -> Self {
        Self {
            store,
            composer: Composer::new(),
            title: settings.title.clone(),
            subtitle: settings.subtitle.clone(),
            started_at: Instant::now(),
            exit_requested: false,
        }
    }

    pub fn header(&self) -> Header<'_> {
        Header {
            title: &self.title,
            subtitle: &self.subtitle,
        }
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    fn sync_composer(&mut self) {
        self.composer.set_disabled(self.store.is_awaiting_reply());
    }
}

/// Applies one action and reports whether the screen needs a redraw.
pub fn apply_action(state: &mut ChatState, action: ChatAction) -> bool {
    let redraw = match action {
        ChatAction::Key(KeyAction::Quit) => {
            state.exit_requested = true;
            false
        }
        ChatAction::Key(KeyAction::Send) => {
            let Some(text) = state.composer.take_submission() else {
                return false;
            };
            match state.store.submit(&text) {
                SubmitOutcome::Sent { .. } | SubmitOutcome::Failed => true,
                SubmitOutcome::Ignored | SubmitOutcome::Busy => false,
            }
        }
        ChatAction::Key(KeyAction::Clear) => {
            state.store.clear();
            true
        }
        ChatAction::Key(KeyAction::Newline) => {
            state.composer.insert_newline();
            true
        }
        ChatAction::Key(KeyAction::Edit(key)) => state.composer.input(key),
        ChatAction::Key(KeyAction::Ignore) => false,
        ChatAction::Paste(text) => state.composer.insert_str(&sanitize_pasted_text(&text)),
        ChatAction::ReplyResolved(reply) => state.store.on_reply_resolved(reply),
    };

    state.sync_composer();
    redraw
}

pub(crate) fn sanitize_pasted_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .filter(|ch| *ch == '\n' || *ch == '\t' || !ch.is_control())
        .collect()
}

fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(10)) {
                match event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        continue;
                    }
                }
            } else {
                tokio::task::yield_now().await;
            }
        }
    })
}

fn action_for_event(event: Event) -> Option<ChatAction> {
    match event {
        Event::Key(key) => Some(ChatAction::Key(map_key(key))),
        Event::Paste(text) => Some(ChatAction::Paste(text)),
        _ => None,
    }
}

fn draw(terminal: &mut ChatTerminal, state: &ChatState) -> Result<(), Box<dyn Error>> {
    let since_start = state.started_at.elapsed();
    terminal.draw(|f| {
        renderer::ui(
            f,
            &state.header(),
            &state.store,
            &state.composer,
            since_start,
        )
    })?;
    Ok(())
}

async fn event_loop(
    terminal: &mut ChatTerminal,
    state: &mut ChatState,
    reply_rx: &mut mpsc::UnboundedReceiver<ResolvedReply>,
) -> Result<(), Box<dyn Error>> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let reader = spawn_event_reader(event_tx);
    let mut tick = tokio::time::interval(INDICATOR_TICK);
    let mut redraw = true;

    let result = loop {
        if redraw {
            if let Err(err) = draw(terminal, state) {
                break Err(err);
            }
        }
        if state.exit_requested() {
            break Ok(());
        }

        redraw = tokio::select! {
            Some(ev) = event_rx.recv() => match action_for_event(ev) {
                Some(action) => apply_action(state, action),
                // Resizes and focus changes only need a repaint.
                None => true,
            },
            Some(reply) = reply_rx.recv() => {
                debug!(reply_id = reply.reply_id, "reply delivered to chat loop");
                apply_action(state, ChatAction::ReplyResolved(reply))
            }
            _ = tick.tick() => state.store.is_awaiting_reply(),
        };
    };

    reader.abort();
    result
}

pub async fn run_chat(settings: SessionSettings) -> Result<(), Box<dyn Error>> {
    let (store, mut reply_rx) = settings.new_session();
    let mut state = ChatState::new(&settings, store);
    info!(
        reply_delay_ms = settings.reply_delay.as_millis() as u64,
        "starting chat session"
    );

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut state, &mut reply_rx).await;
    restore_terminal(&mut terminal)?;

    info!(messages = state.store.messages().len(), "chat session ended");
    result
}
