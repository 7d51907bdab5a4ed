use std::sync::Arc;

use wordbook_lookup::lookup_text;
use wordbook_types::{AppEvent, LookupOutcome};

use crate::presenter::Presenter;
use crate::shell::Shell;

impl<P: Presenter> Shell<P> {
    /// Fire an online lookup on its own task. The result comes back as an
    /// [`AppEvent::LookupFinished`] so only the event loop ever displays it.
    pub(crate) fn start_lookup(&mut self, word: String) {
        let Some(service) = self.service.as_ref().map(Arc::clone) else {
            self.presenter.warn("Online lookup is disabled.");
            return;
        };

        let numbering = self.state.config.lookup.numbering;
        let tx = self.events_tx.clone();
        let cancel = self.cancel.child_token();

        self.status.pending_lookups += 1;
        self.presenter
            .show(&format!("Looking up '{}' online...", word.trim()));
        tracing::debug!("spawning lookup for '{word}'");

        tokio::spawn(async move {
            let outcome = tokio::select! {
                _ = cancel.cancelled() => return,
                outcome = lookup_text(service.as_ref(), &word, numbering) => outcome,
            };

            if let Err(e) = tx.send(AppEvent::LookupFinished { word, outcome }).await {
                tracing::debug!("lookup result dropped: {e}");
            }
        });
    }

    pub(crate) fn finish_lookup(&mut self, word: &str, outcome: LookupOutcome) {
        self.status.pending_lookups = self.status.pending_lookups.saturating_sub(1);

        let text = match &outcome {
            LookupOutcome::Found(definitions) => {
                format!("Online definitions of '{}':\n{definitions}", word.trim())
            }
            LookupOutcome::NotFound => format!("No online definitions found for '{}'.", word.trim()),
            LookupOutcome::Failed(_) => format!("'{}': {outcome}", word.trim()),
        };

        match outcome {
            LookupOutcome::Failed(_) => self.presenter.warn(&text),
            _ => self.presenter.show(&text),
        }
    }
}
