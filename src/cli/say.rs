//! TUI-less "say" command

use std::error::Error;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::constants::GENERIC_ERROR_FALLBACK;
use crate::core::reply::ResolvedReply;
use crate::core::session::{SessionSnapshot, SessionStore, Status, SubmitOutcome};
use crate::core::settings::SessionSettings;

/// Submits `prompt` to a fresh session and prints the outcome. Returns
/// `Ok(false)` when nothing was sent or the session ended up errored.
pub async fn run_say(
    settings: &SessionSettings,
    prompt: &str,
    json: bool,
) -> Result<bool, Box<dyn Error>> {
    let (mut store, mut rx) = settings.new_session();

    let outcome = submit_and_wait(&mut store, &mut rx, prompt).await?;
    if outcome == SubmitOutcome::Ignored {
        eprintln!("Usage: chatshell say <message>");
        return Ok(false);
    }

    let snapshot = store.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        match plain_output(&snapshot) {
            Ok(reply) => println!("{reply}"),
            Err(detail) => eprintln!("❌ {detail}"),
        }
    }

    Ok(snapshot.status != Status::Errored)
}

/// Drives the store until the submission settles: the reply has been applied,
/// or the submission failed or was ignored.
pub(crate) async fn submit_and_wait(
    store: &mut SessionStore,
    rx: &mut UnboundedReceiver<ResolvedReply>,
    prompt: &str,
) -> Result<SubmitOutcome, Box<dyn Error>> {
    let outcome = store.submit(prompt);

    while store.is_awaiting_reply() {
        let Some(reply) = rx.recv().await else {
            return Err("simulated reply channel closed before the reply arrived".into());
        };
        store.on_reply_resolved(reply);
    }

    Ok(outcome)
}

/// The last agent message for a settled session, or the error text for an
/// errored one.
pub(crate) fn plain_output(snapshot: &SessionSnapshot) -> Result<String, String> {
    if snapshot.status == Status::Errored {
        return Err(snapshot
            .error
            .clone()
            .unwrap_or_else(|| GENERIC_ERROR_FALLBACK.to_string()));
    }

    Ok(snapshot
        .messages
        .iter()
        .rev()
        .find(|message| message.is_agent())
        .map(|message| message.content().to_string())
        .unwrap_or_default())
}
