use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;
use wordbook_types::Direction;

use crate::entry::{Entry, normalize_word};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Exhausted,
    Cancelled,
}

/// One queued question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub entry: Entry,
    pub direction: Direction,
}

impl ReviewItem {
    /// Text shown to the user
    pub fn prompt(&self) -> &str {
        match self.direction {
            Direction::WordToMeaning => self.entry.word(),
            Direction::MeaningToWord => self.entry.meaning(),
        }
    }

    /// Value the user is expected to recall
    pub fn expected(&self) -> &str {
        match self.direction {
            Direction::WordToMeaning => self.entry.meaning(),
            Direction::MeaningToWord => self.entry.word(),
        }
    }

    /// Case-insensitive comparison of trimmed text
    pub fn accepts(&self, answer: &str) -> bool {
        normalize_word(answer) == normalize_word(self.expected())
    }
}

/// Input event for one review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer<'a> {
    Text(&'a str),
    /// The user declined to answer
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    /// Correct value, for display
    pub expected: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Answered(Verdict),
    Cancelled,
}

/// One pass over a shuffled snapshot of the word book.
///
/// ```text
/// NotStarted --start--> Running --next (last item)--> Exhausted
///                          \--next(Cancel)----------> Cancelled
/// ```
///
/// Each entry is asked exactly once; correctness never re-queues an item.
#[derive(Debug)]
pub struct ReviewSession {
    queue: VecDeque<ReviewItem>,
    state: SessionState,
    total: usize,
    answered: usize,
    correct: usize,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            state: SessionState::NotStarted,
            total: 0,
            answered: 0,
            correct: 0,
        }
    }

    pub fn start(&mut self, entries: &[Entry]) -> Result<()> {
        self.start_with_rng(entries, &mut rand::thread_rng())
    }

    /// Build the queue from a uniform permutation of `entries`, each with a
    /// uniformly chosen direction.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, entries: &[Entry], rng: &mut R) -> Result<()> {
        if self.state != SessionState::NotStarted {
            return Err(Error::SessionStarted);
        }
        if entries.is_empty() {
            return Err(Error::EmptySession);
        }

        let mut items: Vec<ReviewItem> = entries
            .iter()
            .map(|entry| ReviewItem {
                entry: entry.clone(),
                direction: if rng.gen_bool(0.5) {
                    Direction::WordToMeaning
                } else {
                    Direction::MeaningToWord
                },
            })
            .collect();
        items.shuffle(rng);

        self.total = items.len();
        self.queue = items.into();
        self.state = SessionState::Running;
        tracing::info!("review started with {} word(s)", self.total);
        Ok(())
    }

    /// The item awaiting an answer, if the session is running.
    pub fn current(&self) -> Option<&ReviewItem> {
        match self.state {
            SessionState::Running => self.queue.front(),
            _ => None,
        }
    }

    /// Consume the current item with the user's answer.
    pub fn next(&mut self, answer: Answer<'_>) -> Result<Step> {
        if self.state != SessionState::Running {
            return Err(Error::SessionNotRunning);
        }

        let text = match answer {
            Answer::Text(text) => text,
            Answer::Cancel => {
                tracing::info!(
                    "review cancelled after {}/{} word(s)",
                    self.answered,
                    self.total
                );
                self.queue.clear();
                self.state = SessionState::Cancelled;
                return Ok(Step::Cancelled);
            }
        };

        let Some(item) = self.queue.pop_front() else {
            // Running always has a queued item; treat an empty queue as done.
            self.state = SessionState::Exhausted;
            return Err(Error::SessionNotRunning);
        };

        let correct = item.accepts(text);
        self.answered += 1;
        if correct {
            self.correct += 1;
        }
        tracing::debug!("'{}': correct={correct}", item.entry.word());

        if self.queue.is_empty() {
            self.state = SessionState::Exhausted;
            tracing::info!("review finished: {}/{} correct", self.correct, self.total);
        }

        Ok(Step::Answered(Verdict {
            correct,
            expected: item.expected().to_string(),
        }))
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Items not yet answered
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// 1-based index of the current item
    pub fn position(&self) -> usize {
        self.answered + 1
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("apple", "苹果").unwrap(),
            Entry::new("banana", "香蕉").unwrap(),
            Entry::new("cherry", "樱桃").unwrap(),
        ]
    }

    #[test]
    fn prompt_and_expected_follow_direction() {
        let entry = Entry::new("apple", "Fruit").unwrap();
        let forward = ReviewItem {
            entry: entry.clone(),
            direction: Direction::WordToMeaning,
        };
        assert_eq!(forward.prompt(), "apple");
        assert!(forward.accepts("  FRUIT "));

        let backward = ReviewItem {
            entry,
            direction: Direction::MeaningToWord,
        };
        assert_eq!(backward.prompt(), "Fruit");
        assert!(backward.accepts(" Apple "));
        assert!(!backward.accepts("apples"));
    }

    #[test]
    fn empty_start_leaves_session_unstarted() {
        let mut session = ReviewSession::new();
        assert!(matches!(session.start(&[]), Err(Error::EmptySession)));
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.current().is_none());
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = ReviewSession::new();
        session.start_with_rng(&entries(), &mut rng).unwrap();
        assert!(matches!(
            session.start_with_rng(&entries(), &mut rng),
            Err(Error::SessionStarted)
        ));
    }

    #[test]
    fn score_counts_correct_answers() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = ReviewSession::new();
        session.start_with_rng(&entries(), &mut rng).unwrap();

        let expected = session.current().unwrap().expected().to_string();
        assert_eq!(
            session.next(Answer::Text(&expected)).unwrap(),
            Step::Answered(Verdict {
                correct: true,
                expected: expected.clone(),
            })
        );

        match session.next(Answer::Text("definitely wrong")).unwrap() {
            Step::Answered(verdict) => assert!(!verdict.correct),
            Step::Cancelled => panic!("not cancelled"),
        }

        assert_eq!(session.answered(), 2);
        assert_eq!(session.correct(), 1);
        assert_eq!(session.position(), 3);
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn next_after_exhaustion_errors() {
        let mut session = ReviewSession::new();
        session.start(&entries()[..1]).unwrap();
        session.next(Answer::Text("")).unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(matches!(
            session.next(Answer::Text("x")),
            Err(Error::SessionNotRunning)
        ));
        assert_eq!(session.state(), SessionState::Exhausted);
    }
}
