/// One shell action. Also the target of the one-shot CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { word: String, meaning: String },
    Remove(String),
    Find(String),
    List,
    Lookup(String),
    Review,
    Help,
    Reload,
    Quit,
    /// Blank line
    Nothing,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type `help` for a list")]
    Unknown(String),

    #[error("please enter the word to {0}")]
    MissingWord(&'static str),
}

impl Command {
    /// Parse a shell line.
    ///
    /// `add` takes `<word> = <meaning>`; without `=` the first token is the
    /// word and the rest is the meaning. Empty fields are left for the word
    /// book to reject.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            "" => Command::Nothing,
            "add" | "a" => {
                let (word, meaning) = match rest.split_once('=') {
                    Some((word, meaning)) => (word, meaning),
                    None => rest.split_once(char::is_whitespace).unwrap_or((rest, "")),
                };
                Command::Add {
                    word: word.trim().to_string(),
                    meaning: meaning.trim().to_string(),
                }
            }
            "remove" | "rm" | "delete" => Command::Remove(required(rest, "remove")?),
            "find" | "f" => Command::Find(required(rest, "find")?),
            "lookup" | "define" | "l" => Command::Lookup(required(rest, "look up")?),
            "list" | "ls" => Command::List,
            "review" | "r" => Command::Review,
            "help" | "?" => Command::Help,
            "reload" => Command::Reload,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required(arg: &str, action: &'static str) -> Result<String, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingWord(action))
    } else {
        Ok(arg.to_string())
    }
}
