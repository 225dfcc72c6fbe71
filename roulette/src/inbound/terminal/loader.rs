//! Rotating loader phrases.

use std::ptr;
use std::time::Duration;

/// How long each phrase stays on screen.
pub const LOADER_INTERVAL: Duration = Duration::from_millis(2500);

/// Cursor over a phrase list that wraps after the last phrase.
///
/// Handing it a different list restarts from the first phrase, which is how
/// a language toggle resets the loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseCycle {
    phrases: &'static [&'static str],
    index: usize,
}

impl PhraseCycle {
    /// Track `phrases`, restarting when they differ from the current list.
    ///
    /// Returns `true` only when the list was switched. Republishing the same
    /// list keeps the current phrase.
    pub fn sync(&mut self, phrases: &'static [&'static str]) -> bool {
        if ptr::eq(self.phrases, phrases) {
            return false;
        }
        self.phrases = phrases;
        self.index = 0;
        true
    }

    /// Stop showing phrases. Returns `true` if any were shown.
    pub fn clear(&mut self) -> bool {
        self.sync(&[])
    }

    /// Move to the next phrase.
    pub fn advance(&mut self) {
        let next = self.index + 1;
        self.index = if next < self.phrases.len() { next } else { 0 };
    }

    /// Phrase on screen, if any.
    #[must_use]
    pub fn current(&self) -> Option<&'static str> {
        self.phrases.get(self.index).copied()
    }

    /// Whether ticking would change what is shown.
    #[must_use]
    pub fn is_cycling(&self) -> bool {
        self.phrases.len() > 1
    }
}
