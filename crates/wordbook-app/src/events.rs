use kanal::AsyncReceiver;
use wordbook_core::Answer;
use wordbook_types::AppEvent;

use crate::command::Command;
use crate::presenter::Presenter;
use crate::shell::{Flow, Shell};

pub mod lookup;
pub mod review;
pub mod words;

/// Token that cancels a running review
pub const CANCEL_REVIEW: &str = ":q";

/// App's main loop
///
/// In interactive mode the loop runs until `quit`, Ctrl+C, or end of input
/// once everything in flight has settled. Otherwise it stops as soon as the
/// shell is idle.
pub async fn event_loop<P: Presenter>(
    shell: &mut Shell<P>,
    events_rx: AsyncReceiver<AppEvent>,
    interactive: bool,
) -> anyhow::Result<()> {
    let mut input_closed = false;

    loop {
        if (!interactive || input_closed) && shell.is_idle() {
            break;
        }

        shell.show_prompt(interactive && !input_closed);
        let event = events_rx.recv().await?;
        tracing::debug!("event received: {:?}", std::mem::discriminant(&event));

        if matches!(event, AppEvent::InputClosed) {
            input_closed = true;
        }

        if shell.handle_event(event).await == Flow::Exit {
            break;
        }
    }

    Ok(())
}

impl<P: Presenter> Shell<P> {
    pub async fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Input(line) => {
                if self.review.is_some() {
                    let answer = match line.trim() {
                        CANCEL_REVIEW => Answer::Cancel,
                        text => Answer::Text(text),
                    };
                    self.answer_review(answer).await;
                    return Flow::Continue;
                }

                match Command::parse(&line) {
                    Ok(command) => self.execute(command),
                    Err(e) => {
                        self.presenter.warn(&capitalize(&e.to_string()));
                        Flow::Continue
                    }
                }
            }
            AppEvent::InputClosed => {
                tracing::debug!("input closed");
                if self.review.is_some() {
                    self.answer_review(Answer::Cancel).await;
                }
                Flow::Continue
            }
            AppEvent::LookupFinished { word, outcome } => {
                self.finish_lookup(&word, outcome);
                Flow::Continue
            }
            AppEvent::Shutdown => {
                tracing::info!("shutdown requested");
                Flow::Exit
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
