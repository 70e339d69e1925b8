//! Message area and its short history.
use std::collections::VecDeque;

/// Severity of a message shown to the player.
///
/// `Warning` marks rejected player actions ("out of range"); they are part of
/// normal play and never logged as errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Battle round the message was shown in, when known.
    pub round: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, round: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            round,
            level,
        }
    }
}

/// Circular buffer of messages; the newest entry is what the message area shows.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_warning(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Warning));
    }

    /// Shows `text` in the message area, skipping the push when it is
    /// already the current message.
    pub fn show(&mut self, text: impl Into<String>, round: Option<u32>) {
        let text = text.into();
        if self.latest().is_some_and(|entry| entry.text == text) {
            return;
        }
        self.push(MessageEntry::new(text, round, MessageLevel::Info));
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.show("a", None);
        log.show("b", None);
        log.show("c", None);
        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn show_skips_repeated_current_message() {
        let mut log = MessageLog::new(8);
        log.show("Tir's turn.", Some(1));
        log.show("Tir's turn.", Some(1));
        assert_eq!(log.len(), 1);

        log.push_warning("Soldier is out of range!");
        log.show("Tir's turn.", Some(1));
        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().map(|entry| entry.level), Some(MessageLevel::Info));
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(4);
        log.show("first", None);
        log.show("second", None);
        let recent: Vec<_> = log.recent(1).map(|entry| entry.text.as_str()).collect();
        assert_eq!(recent, vec!["second"]);
    }
}
