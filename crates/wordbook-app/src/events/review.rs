use wordbook_core::{Answer, Direction, ReviewSession, Step};

use crate::events::CANCEL_REVIEW;
use crate::presenter::Presenter;
use crate::shell::Shell;

impl<P: Presenter> Shell<P> {
    pub(crate) fn start_review(&mut self) {
        if self.review.is_some() {
            return;
        }

        let mut session = ReviewSession::new();
        if let Err(e) = session.start(self.state.store.entries()) {
            self.report("start review", e);
            return;
        }

        self.presenter.show(&format!(
            "Reviewing {} word(s). Type {CANCEL_REVIEW} to stop.",
            session.total()
        ));
        self.review = Some(session);
    }

    /// Current review question, numbered `[k/N]`
    pub(crate) fn review_question(&self) -> Option<String> {
        let session = self.review.as_ref()?;
        let item = session.current()?;
        let question = match item.direction {
            Direction::WordToMeaning => format!("What does '{}' mean?", item.prompt()),
            Direction::MeaningToWord => format!("Which word means '{}'?", item.prompt()),
        };
        Some(format!(
            "[{}/{}] {question}\n? ",
            session.position(),
            session.total()
        ))
    }

    pub(crate) async fn answer_review(&mut self, answer: Answer<'_>) {
        let Some(session) = self.review.as_mut() else {
            return;
        };

        let step = match session.next(answer) {
            Ok(step) => step,
            Err(e) => {
                self.review = None;
                self.report("answer", e);
                return;
            }
        };

        match &step {
            Step::Answered(verdict) if verdict.correct => self.presenter.show("Correct!"),
            Step::Answered(verdict) => self
                .presenter
                .show(&format!("Wrong, the answer is '{}'.", verdict.expected)),
            Step::Cancelled => {}
        }

        if session.is_active() {
            tokio::time::sleep(self.state.config.review.pace()).await;
            return;
        }

        let summary = format!(
            "{}: {}/{} correct.",
            match step {
                Step::Cancelled => "Review stopped",
                Step::Answered(_) => "Review finished",
            },
            session.correct(),
            session.answered()
        );
        self.presenter.show(&summary);
        self.review = None;
    }
}
