//! TUI runner: sets up the terminal and drives the main loop

use tokio::sync::mpsc;

use guide_app::config::Settings;
use guide_app::message::Message;
use guide_app::process::process_message;
use guide_app::signals;
use guide_app::state::AppState;
use guide_app::{ClipboardWriter, Host, PreferenceStore};
use guide_core::prelude::*;
use guide_core::Guide;

use super::host::TerminalHost;
use super::{event, render, terminal};

/// Everything the runner needs to start the guide
pub struct RunOptions {
    pub guide: Guide,
    pub settings: Settings,
    pub store: Box<dyn PreferenceStore>,
    /// Attach the terminal host bridge
    pub host: bool,
    /// Forget visited sections before starting
    pub reset_progress: bool,
}

/// Run the guide in the terminal until the user quits
pub async fn run(options: RunOptions) -> Result<()> {
    terminal::install_panic_hook();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let host = if options.host && options.settings.host.enabled {
        let bridge =
            TerminalHost::stdout(&options.settings.host).with_quit_sender(msg_tx.clone());
        Host::new(Box::new(bridge))
    } else {
        Host::absent()
    };

    let mut term = terminal::init()?;

    let mut state = AppState::new(options.guide, options.settings, options.store, host);
    if options.reset_progress {
        state.reset_progress();
    }

    signals::spawn_signal_handler(msg_tx.clone());

    let mut clipboard = ClipboardWriter::system();

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &mut clipboard);

    let restored = terminal::restore();
    info!(
        "Guide closed: {}/{} sections explored",
        state.progress.visited().len(),
        state.progress.total()
    );
    result.and(restored)
}

fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    clipboard: &mut ClipboardWriter,
) -> Result<()> {
    while !state.should_quit() {
        // Timer and clipboard results
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, clipboard);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, clipboard);
        }
    }

    Ok(())
}
