use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::config::Config;
use crate::core::reply::{ReplySimulator, ResolvedReply};
use crate::core::session::SessionStore;

/// Resolved settings for one session: config file values with command-line
/// overrides applied on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub title: String,
    pub subtitle: String,
    pub reply_delay: Duration,
    pub greeting: Option<String>,
}

impl SessionSettings {
    pub fn resolve(config: &Config, delay_override_ms: Option<u64>) -> Self {
        Self {
            title: config.title().to_string(),
            subtitle: config.subtitle().to_string(),
            reply_delay: delay_override_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.reply_delay()),
            greeting: config.greeting().map(str::to_owned),
        }
    }

    /// Builds a store wired to a fresh simulator. The receiver yields the
    /// simulator's replies and must be drained by whoever owns the store.
    pub fn new_session(&self) -> (SessionStore, UnboundedReceiver<ResolvedReply>) {
        let (simulator, rx) = ReplySimulator::new(self.reply_delay);
        let store = SessionStore::with_agent_seed(simulator, self.greeting.iter());
        (store, rx)
    }
}
