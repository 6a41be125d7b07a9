//! Command history with cursor-based recall.

/// Direction of a history recall step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecallDirection {
    /// Toward older entries (the Up arrow).
    Older,
    /// Toward newer entries (the Down arrow).
    Newer,
}

/// An append-only log of executed command lines plus a recall cursor.
///
/// The cursor sits at `entries.len()` (the "fresh prompt" position) after
/// every push; recall walks it toward older entries and back. Walking past
/// the newest entry parks the cursor and yields an empty line so the prompt
/// clears, mirroring familiar shell behavior.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an executed line and reset the cursor to the fresh-prompt
    /// position.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    /// Step the cursor and return the entry it lands on.
    ///
    /// `Older` at the oldest entry returns `None` and leaves the cursor
    /// alone. `Newer` past the newest entry returns `Some("")`.
    pub fn recall(&mut self, direction: RecallDirection) -> Option<String> {
        match direction {
            RecallDirection::Older => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    Some(self.entries[self.cursor].clone())
                } else {
                    None
                }
            }
            RecallDirection::Newer => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                    Some(self.entries[self.cursor].clone())
                } else {
                    self.cursor = self.entries.len();
                    Some(String::new())
                }
            }
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use RecallDirection::{Newer, Older};

    fn make_history(entries: &[&str]) -> History {
        let mut history = History::new();
        for entry in entries {
            history.push(entry);
        }
        history
    }

    #[test]
    fn older_walks_back_through_entries() {
        let mut history = make_history(&["first", "second", "third"]);
        assert_eq!(history.recall(Older).as_deref(), Some("third"));
        assert_eq!(history.recall(Older).as_deref(), Some("second"));
        assert_eq!(history.recall(Older).as_deref(), Some("first"));
    }

    #[test]
    fn older_at_oldest_returns_none() {
        let mut history = make_history(&["only"]);
        assert_eq!(history.recall(Older).as_deref(), Some("only"));
        assert_eq!(history.recall(Older), None);
        // Cursor stays put, so Newer still clears the prompt.
        assert_eq!(history.recall(Newer).as_deref(), Some(""));
    }

    #[test]
    fn newer_walks_forward_then_clears() {
        let mut history = make_history(&["first", "second", "third"]);
        history.recall(Older);
        history.recall(Older);
        history.recall(Older);
        assert_eq!(history.recall(Newer).as_deref(), Some("second"));
        assert_eq!(history.recall(Newer).as_deref(), Some("third"));
        assert_eq!(history.recall(Newer).as_deref(), Some(""));
    }

    #[test]
    fn newer_on_fresh_prompt_clears() {
        let mut history = make_history(&["cmd"]);
        assert_eq!(history.recall(Newer).as_deref(), Some(""));
    }

    #[test]
    fn recall_on_empty_history() {
        let mut history = History::new();
        assert_eq!(history.recall(Older), None);
        assert_eq!(history.recall(Newer).as_deref(), Some(""));
    }

    #[test]
    fn push_resets_cursor() {
        let mut history = make_history(&["first", "second"]);
        history.recall(Older);
        history.recall(Older);
        history.push("third");
        // Recall starts again from the newest entry.
        assert_eq!(history.recall(Older).as_deref(), Some("third"));
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let mut history = make_history(&["ls", "ls"]);
        assert_eq!(history.entries(), ["ls", "ls"]);
    }
}
