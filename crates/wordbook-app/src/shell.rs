use std::sync::Arc;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordbook_core::{Error as CoreError, ReviewSession, WordStore};
use wordbook_lookup::DictionaryService;
use wordbook_types::AppEvent;

use crate::command::Command;
use crate::presenter::Presenter;
use crate::state::AppState;
use crate::status::ViewStatus;

const HELP: &str = "Commands:
  add <word> = <meaning>   add a word
  remove <word>            remove a word
  find <word>              show a word's meaning
  list                     show all words
  lookup <word>            look a word up online
  review                   quiz yourself (:q to stop)
  reload                   re-read the word book from disk
  quit";

/// Whether the event loop keeps going after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The single logical control thread: owns the store and any running review
/// and reacts to one event at a time.
pub struct Shell<P> {
    pub(crate) state: AppState,
    pub(crate) presenter: P,
    pub(crate) service: Option<Arc<dyn DictionaryService>>,
    pub(crate) events_tx: AsyncSender<AppEvent>,
    pub(crate) cancel: CancellationToken,
    pub(crate) review: Option<ReviewSession>,
    pub(crate) status: ViewStatus,
}

impl<P: Presenter> Shell<P> {
    pub fn new(
        state: AppState,
        presenter: P,
        service: Option<Arc<dyn DictionaryService>>,
        events_tx: AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            state,
            presenter,
            service,
            events_tx,
            cancel,
            review: None,
            status: ViewStatus::default(),
        }
    }

    pub fn store(&self) -> &WordStore {
        &self.state.store
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn review(&self) -> Option<&ReviewSession> {
        self.review.as_ref()
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// No review running and no lookup in flight
    pub fn is_idle(&self) -> bool {
        self.review.is_none() && self.status.pending_lookups == 0
    }

    pub fn greet(&mut self) {
        let text = format!(
            "Word book {} ({} word(s)). Type `help` for commands.",
            self.state.store.path().display(),
            self.state.store.len()
        );
        self.presenter.show(&text);
    }

    /// Ask the current review question, or show the shell prompt when
    /// `shell_prompt` is set and no review is running.
    pub fn show_prompt(&mut self, shell_prompt: bool) {
        if let Some(question) = self.review_question() {
            self.presenter.prompt(&question);
        } else if shell_prompt {
            let prompt = self.status.prompt();
            self.presenter.prompt(&prompt);
        }
    }

    pub fn execute(&mut self, command: Command) -> Flow {
        tracing::debug!("executing {command:?}");
        match command {
            Command::Add { word, meaning } => self.add_word(&word, &meaning),
            Command::Remove(word) => self.remove_word(&word),
            Command::Find(word) => self.find_word(&word),
            Command::List => self.list_words(),
            Command::Lookup(word) => self.start_lookup(word),
            Command::Review => self.start_review(),
            Command::Help => self.show_help(),
            Command::Reload => self.reload(),
            Command::Quit => return Flow::Exit,
            Command::Nothing => {}
        }
        Flow::Continue
    }

    /// Surface a core error. Recoverable ones ask for a correction;
    /// persistence failures are counted so a one-shot run can fail.
    pub(crate) fn report(&mut self, action: &str, err: CoreError) {
        if err.is_recoverable() {
            self.presenter.warn(&format!("Cannot {action}: {err}."));
            return;
        }

        tracing::error!("{action} failed: {err}");
        self.status.failures += 1;
        self.presenter.warn(&format!(
            "Could not {action}: {err}. Memory and disk may disagree; retry, or `reload` to discard unsaved changes."
        ));
    }

    fn show_help(&mut self) {
        let text = format!("{HELP}\nMore help: {}", self.state.config.help_url);
        self.presenter.show(&text);
    }
}
