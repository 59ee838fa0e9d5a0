// src/ports/console.rs
use crate::application::Notifier;
use std::io::Write;

/// Prints notifications as single lines on a writer (stdout by default)
pub struct ConsoleNotifier<W: Write = std::io::Stdout> {
    out: std::cell::RefCell<W>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out: std::cell::RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&self, message: &str) {
        let mut out = self.out.borrow_mut();
        // A closed stdout must not abort the run
        let _ = writeln!(out, "{}", message);
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_messages_when_notifying_then_writes_one_line_each() {
        let notifier = ConsoleNotifier::with_writer(Vec::new());

        notifier.notify("Generating flashcards for a.md...");
        notifier.notify("Flashcards successfully generated!");

        let output = String::from_utf8(notifier.into_inner()).unwrap();
        assert_eq!(
            output,
            "Generating flashcards for a.md...\nFlashcards successfully generated!\n"
        );
    }
}
