//! # CyberBot Session Memory
//!
//! File: cli/src/bot/memory.rs
//!
//! Per-session state: the interest the user told us about and the last topic
//! we gave a tip for. One instance lives for exactly one session and is never
//! written to disk.

use tracing::debug;

/// Mutable state carried from one turn to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionMemory {
    interest: Option<String>,
    last_topic: Option<String>,
}

impl SessionMemory {
    /// Creates an empty memory (no interest, no last topic).
    pub fn new() -> Self {
        Self::default()
    }

    /// Remembers the user's interest. Overwrites any previous value.
    /// Blank topics are ignored.
    pub fn set_interest(&mut self, topic: &str) {
        if let Some(topic) = non_blank(topic) {
            debug!(interest = topic, "Remembering interest");
            self.interest = Some(topic.to_string());
        }
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    /// Records the topic of the latest tip. Blank topics are ignored.
    pub fn set_last_topic(&mut self, topic: &str) {
        if let Some(topic) = non_blank(topic) {
            self.last_topic = Some(topic.to_string());
        }
    }

    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let memory = SessionMemory::new();
        assert_eq!(memory.interest(), None);
        assert_eq!(memory.last_topic(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut memory = SessionMemory::new();
        memory.set_interest("phishing");
        memory.set_interest("privacy");
        assert_eq!(memory.interest(), Some("privacy"));

        memory.set_last_topic("password");
        memory.set_last_topic("phishing");
        assert_eq!(memory.last_topic(), Some("phishing"));
    }

    #[test]
    fn test_blank_topics_are_ignored() {
        let mut memory = SessionMemory::new();
        memory.set_interest("encryption");
        memory.set_interest("   ");
        memory.set_last_topic("");
        assert_eq!(memory.interest(), Some("encryption"));
        assert_eq!(memory.last_topic(), None);
    }
}
