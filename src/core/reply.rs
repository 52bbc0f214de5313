use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// A simulated agent reply, tagged with the id of the request that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedReply {
    pub reply_id: u64,
    pub text: String,
}

/// Handle to one in-flight simulated reply.
///
/// Cancelling the handle stops the task before it answers. A reply that was
/// already sent is not recalled; the session store drops it by id instead.
#[derive(Debug, Clone)]
pub struct ReplyHandle {
    reply_id: u64,
    cancel_token: CancellationToken,
}

impl ReplyHandle {
    pub fn reply_id(&self) -> u64 {
        self.reply_id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}

pub fn compose_reply(original: &str) -> String {
    format!("You said: \"{original}\". This is a simulated reply.")
}

#[derive(Clone)]
pub struct ReplySimulator {
    tx: mpsc::UnboundedSender<ResolvedReply>,
    delay: Duration,
}

impl ReplySimulator {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ResolvedReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, delay }, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Spawns the reply task. Must be called from within a tokio runtime.
    pub fn simulate(&self, reply_id: u64, original_text: &str) -> ReplyHandle {
        let cancel_token = CancellationToken::new();
        let handle = ReplyHandle {
            reply_id,
            cancel_token: cancel_token.clone(),
        };

        let tx = self.tx.clone();
        let delay = self.delay;
        let text = compose_reply(original_text);

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    debug!(reply_id, "simulated reply ready");
                    let _ = tx.send(ResolvedReply { reply_id, text });
                }
                _ = cancel_token.cancelled() => {
                    debug!(reply_id, "simulated reply cancelled");
                }
            }
        });

        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn compose_reply_quotes_original_verbatim() {
        assert_eq!(
            compose_reply("hi there"),
            "You said: \"hi there\". This is a simulated reply."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn reply_arrives_after_the_configured_delay() {
        let (simulator, mut rx) = ReplySimulator::new(DELAY);
        let started = tokio::time::Instant::now();
        let handle = simulator.simulate(3, "hello");
        assert_eq!(handle.reply_id(), 3);

        let reply = rx.recv().await.expect("reply");
        assert_eq!(reply.reply_id, 3);
        assert!(reply.text.contains("hello"));
        assert!(started.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_is_sent_before_the_delay() {
        let (simulator, mut rx) = ReplySimulator::new(DELAY);
        let _handle = simulator.simulate(1, "early");

        tokio::time::sleep(DELAY - Duration::from_millis(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_reply_never_resolves() {
        let (simulator, mut rx) = ReplySimulator::new(DELAY);
        let handle = simulator.simulate(1, "never");
        handle.cancel();
        assert!(handle.is_cancelled());

        tokio::time::sleep(DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn each_invocation_resolves_exactly_once() {
        let (simulator, mut rx) = ReplySimulator::new(DELAY);
        let _first = simulator.simulate(1, "one");
        let _second = simulator.simulate(2, "two");

        let mut ids = vec![
            rx.recv().await.expect("first").reply_id,
            rx.recv().await.expect("second").reply_id,
        ];
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);

        tokio::time::sleep(DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }
}
