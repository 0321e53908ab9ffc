//! Message processing: runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::clipboard::ClipboardWriter;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up message it produces
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    clipboard: &mut ClipboardWriter,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, clipboard);
        }

        msg = result.message;
    }
}
