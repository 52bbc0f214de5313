//! The session store: one conversation's history, status and pending reply.
//!
//! Every mutation goes through [`SessionStore::submit`], [`SessionStore::clear`]
//! or [`SessionStore::on_reply_resolved`]. The store is owned by a single task
//! (the chat loop or the `say` command), so each call is applied whole before
//! the next one starts and a reader never sees half an update.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::constants::{ERROR_TRIGGER, SIMULATED_FAILURE_DETAIL};
use crate::core::message::{Message, MessageId, Role};
use crate::core::reply::{ReplyHandle, ReplySimulator, ResolvedReply};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Idle,
    AwaitingReply,
    Errored,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::AwaitingReply => "awaiting_reply",
            Status::Errored => "errored",
        }
    }
}

/// Status, error detail and pending reply kept together so that an errored
/// session always has a detail and only an awaiting session has a handle.
#[derive(Debug)]
enum Phase {
    Idle,
    AwaitingReply(ReplyHandle),
    Errored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank after trimming; nothing changed.
    Ignored,
    /// A reply is still pending; nothing changed.
    Busy,
    /// The text hit the failure trigger; the session is now errored.
    Failed,
    Sent {
        message_id: MessageId,
        reply_id: u64,
    },
}

/// Owned copy of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub messages: Vec<Message>,
    pub status: Status,
    pub error: Option<String>,
}

pub struct SessionStore {
    messages: Vec<Message>,
    phase: Phase,
    simulator: ReplySimulator,
    next_message_seq: u64,
    next_reply_id: u64,
    revision: u64,
}

impl SessionStore {
    pub fn new(simulator: ReplySimulator) -> Self {
        Self {
            messages: Vec::new(),
            phase: Phase::Idle,
            simulator,
            next_message_seq: 0,
            next_reply_id: 0,
            revision: 0,
        }
    }

    /// Starts a session whose history already holds agent-authored lines,
    /// e.g. a configured greeting. Blank entries are skipped.
    pub fn with_agent_seed<I, S>(simulator: ReplySimulator, seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::new(simulator);
        for line in seed {
            let content = line.as_ref().trim();
            if !content.is_empty() {
                store.push_message(Role::Agent, content.to_string());
            }
        }
        store.revision = 0;
        store
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Idle => Status::Idle,
            Phase::AwaitingReply(_) => Status::AwaitingReply,
            Phase::Errored(_) => Status::Errored,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Errored(detail) => Some(detail.as_str()),
            _ => None,
        }
    }

    pub fn pending_reply_id(&self) -> Option<u64> {
        match &self.phase {
            Phase::AwaitingReply(handle) => Some(handle.reply_id()),
            _ => None,
        }
    }

    pub fn is_awaiting_reply(&self) -> bool {
        matches!(self.phase, Phase::AwaitingReply(_))
    }

    /// Bumped by every call that changes what a snapshot would show.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            messages: self.messages.clone(),
            status: self.status(),
            error: self.error().map(str::to_owned),
        }
    }

    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if self.is_awaiting_reply() {
            debug!("submission rejected while a reply is pending");
            return SubmitOutcome::Busy;
        }

        if contains_error_trigger(trimmed) {
            warn!("submission matched the failure trigger");
            self.phase = Phase::Errored(SIMULATED_FAILURE_DETAIL.to_string());
            self.revision += 1;
            return SubmitOutcome::Failed;
        }

        let message_id = self.push_message(Role::User, trimmed.to_string());

        self.next_reply_id += 1;
        let reply_id = self.next_reply_id;
        let handle = self.simulator.simulate(reply_id, trimmed);
        self.phase = Phase::AwaitingReply(handle);
        self.revision += 1;

        info!(%message_id, reply_id, "message submitted");
        SubmitOutcome::Sent {
            message_id,
            reply_id,
        }
    }

    pub fn clear(&mut self) {
        if let Phase::AwaitingReply(handle) = &self.phase {
            debug!(reply_id = handle.reply_id(), "cancelling pending reply");
            handle.cancel();
        }

        let changed = !self.messages.is_empty() || !matches!(self.phase, Phase::Idle);
        self.messages.clear();
        self.phase = Phase::Idle;
        if changed {
            self.revision += 1;
            info!("session cleared");
        }
    }

    /// Applies a simulated reply. Returns `false` when the reply no longer
    /// belongs to this session (it was cleared while the reply was pending).
    pub fn on_reply_resolved(&mut self, resolved: ResolvedReply) -> bool {
        if self.pending_reply_id() != Some(resolved.reply_id) {
            debug!(
                reply_id = resolved.reply_id,
                "discarding stale simulated reply"
            );
            return false;
        }

        let message_id = self.push_message(Role::Agent, resolved.text);
        self.phase = Phase::Idle;
        self.revision += 1;

        info!(%message_id, reply_id = resolved.reply_id, "reply received");
        true
    }

    fn push_message(&mut self, role: Role, content: String) -> MessageId {
        self.next_message_seq += 1;
        let id = MessageId::new(self.next_message_seq);
        self.messages.push(Message::new(id, role, content));
        id
    }
}

impl Drop for SessionStore {
    fn drop(&mut self) {
        if let Phase::AwaitingReply(handle) = &self.phase {
            handle.cancel();
        }
    }
}

fn contains_error_trigger(text: &str) -> bool {
    text.to_lowercase().contains(ERROR_TRIGGER)
}
