//! Action handlers: UpdateAction dispatch and background timers

use tokio::sync::mpsc;

use guide_core::prelude::*;

use crate::clipboard::ClipboardWriter;
use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action returned by `update`
///
/// Transition commits are delivered by a sleeping task; clipboard writes run
/// inline and report back through the channel.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &mut ClipboardWriter,
) {
    match action {
        UpdateAction::ScheduleCommit(pending) => {
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                tokio::time::sleep(pending.delay).await;
                let msg = Message::CommitTransition {
                    dimension: pending.dimension,
                    generation: pending.generation,
                };
                if tx.send(msg).await.is_err() {
                    trace!("Event loop gone before {:?} commit", pending.dimension);
                }
            });
        }

        UpdateAction::CopyToClipboard { text } => {
            let msg = match clipboard.copy(&text) {
                Ok(method) => Message::CopyCompleted { text, method },
                Err(e) => Message::CopyFailed {
                    reason: e.to_string(),
                },
            };
            if let Err(e) = msg_tx.try_send(msg) {
                warn!("Dropped clipboard result: {}", e);
            }
        }
    }
}
