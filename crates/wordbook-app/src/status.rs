/// View state of the shell, updated by the event handlers.
#[derive(Clone, Debug, Default)]
pub struct ViewStatus {
    /// Online lookups spawned but not yet delivered
    pub pending_lookups: usize,
    /// Persistence failures reported this run
    pub failures: usize,
}

impl ViewStatus {
    /// Shell prompt, with a loading indicator while lookups are in flight
    pub fn prompt(&self) -> String {
        match self.pending_lookups {
            0 => "> ".to_string(),
            1 => "(1 lookup pending) > ".to_string(),
            n => format!("({n} lookups pending) > "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_shows_pending_lookups() {
        let mut status = ViewStatus::default();
        assert_eq!(status.prompt(), "> ");
        status.pending_lookups = 1;
        assert_eq!(status.prompt(), "(1 lookup pending) > ");
        status.pending_lookups = 3;
        assert_eq!(status.prompt(), "(3 lookups pending) > ");
    }
}
