use std::io::{self, BufRead};
use std::thread;

use kanal::Sender;
use tokio_util::sync::CancellationToken;
use wordbook_types::AppEvent;

/// Forward stdin lines to the event loop, then [`AppEvent::InputClosed`].
///
/// Runs on a detached thread: a read blocked on the terminal must not keep
/// the runtime from shutting down.
pub fn spawn_input_reader(tx: Sender<AppEvent>, cancel: CancellationToken) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                if cancel.is_cancelled() {
                    return;
                }

                match line {
                    Ok(line) => {
                        if tx.send(AppEvent::Input(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to read input: {e}");
                        break;
                    }
                }
            }

            let _ = tx.send(AppEvent::InputClosed);
        })?;

    Ok(())
}
