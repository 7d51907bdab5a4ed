use crate::presenter::Presenter;
use crate::shell::Shell;

impl<P: Presenter> Shell<P> {
    pub(crate) fn add_word(&mut self, word: &str, meaning: &str) {
        let result = self
            .state
            .store
            .add(word, meaning)
            .map(|entry| entry.word().to_string());

        match result {
            Ok(word) => self
                .presenter
                .show(&format!("Added '{word}' to the word book.")),
            Err(e) => self.report("add word", e),
        }
    }

    pub(crate) fn remove_word(&mut self, word: &str) {
        match self.state.store.remove(word) {
            Ok(true) => self
                .presenter
                .show(&format!("Removed '{}' from the word book.", word.trim())),
            Ok(false) => self
                .presenter
                .show(&format!("'{}' is not in the word book.", word.trim())),
            Err(e) => self.report("remove word", e),
        }
    }

    pub(crate) fn find_word(&mut self, word: &str) {
        let message = match self.state.store.find(word) {
            Some(entry) => format!("'{}' means: {}", entry.word(), entry.meaning()),
            None => format!("'{}' is not in the word book.", word.trim()),
        };
        self.presenter.show(&message);
    }

    pub(crate) fn list_words(&mut self) {
        if self.state.store.is_empty() {
            self.presenter.show("The word book is empty.");
            return;
        }

        let listing = self
            .state
            .store
            .list_all()
            .into_iter()
            .map(|(word, meaning)| format!("{word} - {meaning}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.presenter.show(&listing);
    }

    pub(crate) fn reload(&mut self) {
        if self.review.is_some() {
            self.presenter.warn("Finish the review before reloading.");
            return;
        }

        match self.state.store.load() {
            Ok(()) => {
                let count = self.state.store.len();
                self.presenter
                    .show(&format!("Reloaded {count} word(s) from disk."));
            }
            Err(e) => self.report("reload", e),
        }
    }
}
