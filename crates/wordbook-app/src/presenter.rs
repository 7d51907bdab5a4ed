use std::io::{self, Write};

/// Presentation boundary: where text goes and how questions are asked.
/// Answers come back separately as input events.
pub trait Presenter {
    /// Display a block of text (listings, lookup results, confirmations)
    fn show(&mut self, text: &str);

    /// Ask the user to correct something or report a failure
    fn warn(&mut self, text: &str);

    /// Display a question that awaits the next input line
    fn prompt(&mut self, text: &str);
}

/// Presenter writing to standard output
#[derive(Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn warn(&mut self, text: &str) {
        println!("! {text}");
    }

    fn prompt(&mut self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = write!(stdout, "{text}");
        let _ = stdout.flush();
    }
}
