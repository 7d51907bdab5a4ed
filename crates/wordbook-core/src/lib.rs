//! Word book core: validated entries, the sorted on-disk store and the
//! review state machine.

pub mod entry;
pub mod error;
pub mod review;
pub mod store;

pub use entry::{Entry, Field, normalize_word};
pub use error::{Error, Result};
pub use review::{Answer, ReviewItem, ReviewSession, SessionState, Step, Verdict};
pub use store::WordStore;
pub use wordbook_types::Direction;
