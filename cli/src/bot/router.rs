//! # CyberBot Response Router
//!
//! File: cli/src/bot/router.rs
//!
//! ## Overview
//!
//! Turns one line of user input into one reply. The input is trimmed and
//! lower-cased, then handed to a fixed list of strategies. The first strategy
//! that matches produces the reply and nothing after it runs.
//!
//! ## Strategy Order
//!
//! 1. Sentiment: a feeling word ("worried", "curious", "frustrated")
//! 2. Interest capture: "i'm interested in X" / "i am interested in X"
//! 3. Interest recall: "recommend" / "suggest", only once an interest is known
//! 4. Topic tip: a random tip for the first topic mentioned
//! 5. Follow-up: "tell me more" / "more info" about the last tipped topic
//! 6. Small talk: "how are you", "purpose", "what can i ask"
//! 7. Q&A lookup in the question bank
//! 8. Fallback, addressed to the user by name
//!
//! The order decides every ambiguous input. "worried about password" is a
//! sentiment reply, and "what is phishing" gets a phishing tip before the
//! question bank is ever consulted.
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::bot::{KnowledgeBase, ResponseRouter, SessionMemory, Strategy};
//!
//! let kb = KnowledgeBase::builtin().unwrap();
//! let mut router = ResponseRouter::with_seed(kb, 42);
//! let mut memory = SessionMemory::new();
//!
//! let reply = router.route("I'm interested in encryption", &mut memory, "Ada");
//! assert_eq!(reply.strategy, Strategy::InterestCapture);
//! assert_eq!(memory.interest(), Some("encryption"));
//! ```
//!
use crate::bot::knowledge::KnowledgeBase;
use crate::bot::memory::SessionMemory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::{debug, warn};

const INTEREST_PREFIXES: [&str; 2] = ["i'm interested in ", "i am interested in "];
const RECALL_WORDS: [&str; 2] = ["recommend", "suggest"];
const FOLLOW_UP_PHRASES: [&str; 2] = ["tell me more", "more info"];

/// Fixed small-talk replies, checked in order.
const SMALL_TALK: [(&str, &str); 3] = [
    (
        "how are you",
        "I'm just a bot, but I'm running smoothly! How can I help you?",
    ),
    (
        "purpose",
        "I help you learn cybersecurity basics—just ask me anything!",
    ),
    (
        "what can i ask",
        "You can ask about phishing, passwords, privacy, or other security topics.",
    ),
];

/// The matching strategy that produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sentiment,
    InterestCapture,
    InterestRecall,
    TopicTip,
    FollowUp,
    SmallTalk,
    KnowledgeLookup,
    Fallback,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Sentiment => "sentiment",
            Strategy::InterestCapture => "interest-capture",
            Strategy::InterestRecall => "interest-recall",
            Strategy::TopicTip => "topic-tip",
            Strategy::FollowUp => "follow-up",
            Strategy::SmallTalk => "small-talk",
            Strategy::KnowledgeLookup => "knowledge-lookup",
            Strategy::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A reply together with the strategy that chose it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub strategy: Strategy,
}

impl Reply {
    fn new(strategy: Strategy, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strategy,
        }
    }
}

/// # Response Router (`ResponseRouter`)
///
/// Owns the knowledge base and the random source used for topic tips. The
/// router keeps no conversation state of its own; everything that carries
/// over between turns lives in the `SessionMemory` passed to each call.
#[derive(Debug, Clone)]
pub struct ResponseRouter {
    knowledge: KnowledgeBase,
    rng: StdRng,
}

impl ResponseRouter {
    /// Creates a router whose tip selection is seeded from OS entropy.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self {
            knowledge,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a router with a fixed seed, for reproducible tip selection.
    pub fn with_seed(knowledge: KnowledgeBase, seed: u64) -> Self {
        Self {
            knowledge,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Returns the reply text for `raw_input`, updating `memory`.
    pub fn respond(&mut self, raw_input: &str, memory: &mut SessionMemory, name: &str) -> String {
        self.route(raw_input, memory, name).text
    }

    /// Runs the strategies in priority order and returns the first reply.
    pub fn route(&mut self, raw_input: &str, memory: &mut SessionMemory, name: &str) -> Reply {
        let input = raw_input.trim().to_lowercase();
        let reply = self.select(&input, memory, name);
        debug!(
            input = %input,
            strategy = %reply.strategy,
            interest = ?memory.interest(),
            last_topic = ?memory.last_topic(),
            "Routed input"
        );
        reply
    }

    fn select(&mut self, input: &str, memory: &mut SessionMemory, name: &str) -> Reply {
        if let Some(reply) = self.knowledge.sentiment_for(input) {
            return Reply::new(Strategy::Sentiment, reply);
        }

        if INTEREST_PREFIXES.iter().any(|p| input.starts_with(p)) {
            if let Some(topic) = input.split_whitespace().last() {
                memory.set_interest(topic);
                return Reply::new(
                    Strategy::InterestCapture,
                    format!("Great! I'll remember you're interested in {}.", topic),
                );
            }
        }

        if RECALL_WORDS.iter().any(|w| input.contains(w)) {
            if let Some(interest) = memory.interest() {
                return Reply::new(
                    Strategy::InterestRecall,
                    format!(
                        "As someone interested in {}, you might also explore secure backups.",
                        interest
                    ),
                );
            }
        }

        if let Some(topic) = self.knowledge.topic_in(input) {
            match self.knowledge.tip_for(topic, &mut self.rng) {
                Some(tip) => {
                    memory.set_last_topic(topic);
                    return Reply::new(Strategy::TopicTip, tip);
                }
                None => warn!(topic, "Matched topic has no tips"),
            }
        }

        if FOLLOW_UP_PHRASES.iter().any(|p| input.contains(p)) {
            if let Some(topic) = memory.last_topic() {
                match self.knowledge.follow_up_for(topic) {
                    Some(text) => return Reply::new(Strategy::FollowUp, text),
                    None => warn!(topic, "Last topic has no follow-up"),
                }
            }
        }

        if let Some((_, reply)) = SMALL_TALK.iter().find(|(phrase, _)| input.contains(phrase)) {
            return Reply::new(Strategy::SmallTalk, *reply);
        }

        if let Some(answer) = self.knowledge.find_answer(input) {
            return Reply::new(Strategy::KnowledgeLookup, answer);
        }

        Reply::new(
            Strategy::Fallback,
            format!("Sorry {}, I didn’t understand that. Could you rephrase?", name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const WORRIED: &str = "It's okay to feel worried. Let's go step by step.";

    fn router() -> ResponseRouter {
        ResponseRouter::with_seed(KnowledgeBase::builtin().unwrap(), 1234)
    }

    #[test]
    fn test_sentiment_beats_topic() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        let reply = router.route("I'm worried about my password", &mut memory, "Sam");
        assert_eq!(reply, Reply::new(Strategy::Sentiment, WORRIED));
        assert_eq!(memory.last_topic(), None);
    }

    #[test]
    fn test_captures_interest_from_last_word() {
        let mut router = router();
        let mut memory = SessionMemory::new();

        let reply = router.respond("i'm interested in phishing", &mut memory, "Sam");
        assert_eq!(reply, "Great! I'll remember you're interested in phishing.");
        assert_eq!(memory.interest(), Some("phishing"));

        // Trailing whitespace is trimmed before matching; a later statement overwrites.
        router.respond("  I am interested in network   privacy  ", &mut memory, "Sam");
        assert_eq!(memory.interest(), Some("privacy"));
    }

    #[test]
    fn test_capture_needs_a_topic_after_the_prefix() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        let reply = router.route("i'm interested in", &mut memory, "Sam");
        assert_ne!(reply.strategy, Strategy::InterestCapture);
        assert_eq!(memory.interest(), None);
    }

    #[test]
    fn test_recall_uses_stored_interest() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        memory.set_interest("phishing");

        let reply = router.route("can you recommend something", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::InterestRecall);
        assert_eq!(
            reply.text,
            "As someone interested in phishing, you might also explore secure backups."
        );
    }

    #[test]
    fn test_recall_without_interest_falls_through() {
        let mut router = router();
        let mut memory = SessionMemory::new();

        let reply = router.route("can you suggest something", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::Fallback);

        let reply = router.route("recommend a password manager", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::TopicTip);
    }

    #[test]
    fn test_topic_tip_sets_last_topic_and_covers_all_tips() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        let tips: HashSet<_> = router.knowledge().tips("password").unwrap().iter().copied().collect();

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let reply = router.route("password", &mut memory, "Sam");
            assert_eq!(reply.strategy, Strategy::TopicTip);
            assert!(tips.contains(reply.text.as_str()));
            assert_eq!(memory.last_topic(), Some("password"));
            seen.insert(reply.text);
        }
        assert_eq!(seen.len(), tips.len());
    }

    #[test]
    fn test_first_topic_in_table_order_wins() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        router.route("privacy or password?", &mut memory, "Sam");
        assert_eq!(memory.last_topic(), Some("password"));
    }

    #[test]
    fn test_follow_up_requires_a_last_topic() {
        let mut router = router();
        let mut memory = SessionMemory::new();

        let reply = router.route("tell me more", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::Fallback);
        assert_eq!(
            reply.text,
            "Sorry Sam, I didn’t understand that. Could you rephrase?"
        );

        router.route("privacy", &mut memory, "Sam");
        let reply = router.route("More info please", &mut memory, "Sam");
        assert_eq!(
            reply,
            Reply::new(
                Strategy::FollowUp,
                "For privacy: limit what you share publicly and review app data settings."
            )
        );
        assert_eq!(memory.last_topic(), Some("privacy"));
    }

    #[test]
    fn test_topic_in_follow_up_request_gets_a_fresh_tip() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        router.route("privacy", &mut memory, "Sam");

        let reply = router.route("tell me more about phishing", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::TopicTip);
        assert_eq!(memory.last_topic(), Some("phishing"));
    }

    #[test]
    fn test_small_talk_in_order() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        assert_eq!(
            router.respond("Hi, how are you?", &mut memory, "Sam"),
            "I'm just a bot, but I'm running smoothly! How can I help you?"
        );
        assert_eq!(
            router.respond("what is your purpose", &mut memory, "Sam"),
            "I help you learn cybersecurity basics—just ask me anything!"
        );
        assert_eq!(
            router.respond("What can I ask?", &mut memory, "Sam"),
            "You can ask about phishing, passwords, privacy, or other security topics."
        );
    }

    #[test]
    fn test_question_bank_after_small_talk() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        let reply = router.route("What is ransomware?", &mut memory, "Sam");
        assert_eq!(
            reply,
            Reply::new(
                Strategy::KnowledgeLookup,
                "Ransomware encrypts your files and demands payment to restore access."
            )
        );
    }

    #[test]
    fn test_topic_words_shadow_question_bank() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        let reply = router.route("what is phishing", &mut memory, "Sam");
        assert_eq!(reply.strategy, Strategy::TopicTip);
        assert!(router
            .knowledge()
            .tips("phishing")
            .unwrap()
            .contains(&reply.text.as_str()));
    }

    #[test]
    fn test_every_input_gets_a_reply() {
        let mut router = router();
        let mut memory = SessionMemory::new();
        for input in ["", "   ", "?", "asdf qwerty", "EXIT", "i am interested in x"] {
            assert!(!router.respond(input, &mut memory, "Sam").is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_tips() {
        let kb = KnowledgeBase::builtin().unwrap();
        let mut a = ResponseRouter::with_seed(kb, 9);
        let mut b = ResponseRouter::with_seed(kb, 9);
        let (mut ma, mut mb) = (SessionMemory::new(), SessionMemory::new());
        for _ in 0..10 {
            assert_eq!(
                a.respond("phishing", &mut ma, "x"),
                b.respond("phishing", &mut mb, "x")
            );
        }
    }
}
