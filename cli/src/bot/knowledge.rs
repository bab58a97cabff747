//! # CyberBot Knowledge Base
//!
//! File: cli/src/bot/knowledge.rs
//!
//! ## Overview
//!
//! The static data the bot answers from: the question/answer bank, the
//! randomized tips per topic, the sentiment replies and the "tell me more"
//! follow-ups. Everything is read-only after construction.
//!
//! ## Architecture
//!
//! Every table is an ordered slice of pairs, never a map. Matching walks the
//! tables front to back and the first hit wins, so the order of the entries
//! below *is* the matching priority. Reordering an entry changes behaviour.
//!
//! Construction validates the tables (`KnowledgeBase::new`):
//! - triggers and sentiment keywords are non-empty and lowercase
//! - every topic has at least one tip and exactly one follow-up
//! - no key appears twice in the same table
//!
//! ## Examples
//!
//! ```rust
//! use cyberbot::bot::KnowledgeBase;
//!
//! let kb = KnowledgeBase::builtin().expect("built-in tables are valid");
//! assert_eq!(
//!     kb.find_answer("So, what is malware?"),
//!     Some("Malware is malicious software designed to damage or gain unauthorized access to systems.")
//! );
//! assert_eq!(kb.topic_in("my password leaked"), Some("password"));
//! ```
//!
use crate::core::error::{BotError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::debug;

/// A trigger phrase and the fixed answer it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QaEntry {
    /// Lowercase substring looked for in the user's input.
    pub trigger: &'static str,
    pub answer: &'static str,
}

/// The randomized tips for one topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicTips {
    pub topic: &'static str,
    pub tips: &'static [&'static str],
}

/// A sentiment keyword and the reply it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentReply {
    pub keyword: &'static str,
    pub reply: &'static str,
}

/// The elaboration given for a topic on "tell me more".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub topic: &'static str,
    pub elaboration: &'static str,
}

const fn qa(trigger: &'static str, answer: &'static str) -> QaEntry {
    QaEntry { trigger, answer }
}

/// The 30 predefined questions, in matching order.
pub const QUESTION_BANK: &[QaEntry] = &[
    qa("what is phishing", "Phishing is a social engineering attack where attackers impersonate legitimate institutions to steal sensitive data."),
    qa("how to spot fake emails", "Check for poor grammar, mismatched URLs, sender addresses, and unexpected attachments."),
    qa("what is a strong password", "A strong password is at least 12 characters long and includes uppercase, lowercase, numbers, and symbols."),
    qa("how to manage passwords", "Use a reputable password manager to generate and store unique passwords."),
    qa("what is two factor authentication", "2FA adds a second verification step, such as a text code or app notification."),
    qa("why update software", "Software updates often include security patches that fix vulnerabilities."),
    qa("what is malware", "Malware is malicious software designed to damage or gain unauthorized access to systems."),
    qa("how to avoid malware", "Avoid downloading attachments from unknown senders and keep antivirus enabled."),
    qa("what is secure browsing", "Secure browsing means using HTTPS connections and avoiding suspicious websites."),
    qa("how to recognize secure websites", "Look for HTTPS and a padlock icon in the address bar."),
    qa("what is vpn", "A VPN encrypts your internet traffic and hides your IP address."),
    qa("why use vpn", "VPNs protect your data on public networks and maintain privacy."),
    qa("what is encryption", "Encryption converts data into a coded form to prevent unauthorized access."),
    qa("what is social engineering", "Social engineering uses psychological manipulation to trick users into revealing information."),
    qa("how to prevent social engineering", "Be cautious of unsolicited requests and verify identities before sharing info."),
    qa("what is ransomware", "Ransomware encrypts your files and demands payment to restore access."),
    qa("how to protect against ransomware", "Maintain regular backups and update your security software."),
    qa("how to report phishing", "Forward phishing emails to your IT department or the service provider."),
    qa("what is antivirus", "Antivirus software detects and removes malware."),
    qa("how to choose antivirus", "Select reputable software with regular update support."),
    qa("what is adware", "Adware displays unwanted ads and may track browsing habits."),
    qa("how to remove adware", "Use antivirus or anti-adware tools to scan and remove it."),
    qa("what is spam", "Spam is unsolicited bulk messages, often used for phishing or advertising."),
    qa("how to block spam", "Use email filters and never subscribe to unknown mailing lists."),
    qa("what is firewall", "A firewall monitors and controls incoming and outgoing network traffic."),
    qa("why use firewall", "Firewalls protect networks from unauthorized access."),
    qa("what is public wi-fi risk", "Public Wi-Fi can be insecure, allowing attackers to intercept your traffic."),
    qa("how to secure wi-fi", "Use WPA2/WPA3 encryption and a strong password for your network."),
    qa("what is shoulder surfing", "Shoulder surfing is observing someone’s screen without permission."),
    qa("how to prevent shoulder surfing", "Position your screen away from others and use privacy filters."),
];

/// Topic tips. The first topic found in the input wins.
pub const TOPIC_TIPS: &[TopicTips] = &[
    TopicTips {
        topic: "phishing",
        tips: &[
            "Be cautious of emails asking for personal information.",
            "Verify sender addresses before clicking any link.",
            "Never enter credentials on sites linked from email.",
        ],
    },
    TopicTips {
        topic: "password",
        tips: &[
            "Use a passphrase of 4+ words you can remember.",
            "Enable 2FA for all critical accounts.",
            "Never reuse passwords across sites.",
        ],
    },
    TopicTips {
        topic: "privacy",
        tips: &[
            "Review app permissions on your phone regularly.",
            "Use a VPN on public Wi-Fi.",
            "Check privacy settings on social media.",
        ],
    },
];

pub const SENTIMENT_REPLIES: &[SentimentReply] = &[
    SentimentReply {
        keyword: "worried",
        reply: "It's okay to feel worried. Let's go step by step.",
    },
    SentimentReply {
        keyword: "curious",
        reply: "Great! Curiosity helps you learn—ask me anything!",
    },
    SentimentReply {
        keyword: "frustrated",
        reply: "I understand it can be tricky. How can I clarify things?",
    },
];

pub const FOLLOW_UPS: &[FollowUp] = &[
    FollowUp {
        topic: "phishing",
        elaboration: "More on phishing: attackers often use social pressure—always pause and verify.",
    },
    FollowUp {
        topic: "password",
        elaboration: "On passwords: update them periodically and consider a password manager.",
    },
    FollowUp {
        topic: "privacy",
        elaboration: "For privacy: limit what you share publicly and review app data settings.",
    },
];

/// # Knowledge Base (`KnowledgeBase`)
///
/// Read-only view over the validated tables. Cheap to copy around (it only
/// holds slices) and safe to share between sessions.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    questions: &'static [QaEntry],
    topics: &'static [TopicTips],
    sentiments: &'static [SentimentReply],
    follow_ups: &'static [FollowUp],
}

impl KnowledgeBase {
    /// Builds the knowledge base from the tables compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::new(QUESTION_BANK, TOPIC_TIPS, SENTIMENT_REPLIES, FOLLOW_UPS)
    }

    /// Builds a knowledge base from caller-supplied tables.
    ///
    /// # Errors
    ///
    /// Returns `BotError::MalformedTable` if a trigger or sentiment keyword is
    /// empty or not lowercase, a topic has no tips or no follow-up, or a key is
    /// repeated within its table.
    pub fn new(
        questions: &'static [QaEntry],
        topics: &'static [TopicTips],
        sentiments: &'static [SentimentReply],
        follow_ups: &'static [FollowUp],
    ) -> Result<Self> {
        check_keys("Q&A trigger", questions.iter().map(|q| q.trigger))?;
        check_keys("sentiment keyword", sentiments.iter().map(|s| s.keyword))?;
        check_keys("topic", topics.iter().map(|t| t.topic))?;
        check_keys("follow-up topic", follow_ups.iter().map(|f| f.topic))?;

        for entry in topics {
            if entry.tips.is_empty() {
                return Err(BotError::MalformedTable(format!(
                    "topic '{}' has no tips",
                    entry.topic
                ))
                .into());
            }
            if !follow_ups.iter().any(|f| f.topic == entry.topic) {
                return Err(BotError::MalformedTable(format!(
                    "topic '{}' has no follow-up",
                    entry.topic
                ))
                .into());
            }
        }

        debug!(
            questions = questions.len(),
            topics = topics.len(),
            sentiments = sentiments.len(),
            "Knowledge base loaded"
        );
        Ok(Self {
            questions,
            topics,
            sentiments,
            follow_ups,
        })
    }

    /// Returns the answer of the first Q&A entry whose trigger appears in
    /// `input`, ignoring case.
    pub fn find_answer(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.questions
            .iter()
            .find(|entry| input.contains(entry.trigger))
            .map(|entry| entry.answer)
    }

    /// Picks one tip for `topic` uniformly at random.
    ///
    /// Returns `None` if `topic` is not in the tip table.
    pub fn tip_for<R: Rng + ?Sized>(&self, topic: &str, rng: &mut R) -> Option<&'static str> {
        self.tips(topic)
            .and_then(|tips| tips.choose(rng))
            .copied()
    }

    /// The fixed elaboration for `topic`, if it has one.
    pub fn follow_up_for(&self, topic: &str) -> Option<&'static str> {
        self.follow_ups
            .iter()
            .find(|f| f.topic == topic)
            .map(|f| f.elaboration)
    }

    /// The reply for the first sentiment keyword found in `input`.
    pub fn sentiment_for(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.sentiments
            .iter()
            .find(|s| input.contains(s.keyword))
            .map(|s| s.reply)
    }

    /// The first topic, in table order, mentioned in `input`.
    pub fn topic_in(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        self.topics
            .iter()
            .find(|t| input.contains(t.topic))
            .map(|t| t.topic)
    }

    /// All tips for `topic`.
    pub fn tips(&self, topic: &str) -> Option<&'static [&'static str]> {
        self.topics.iter().find(|t| t.topic == topic).map(|t| t.tips)
    }

    pub fn topics(&self) -> impl Iterator<Item = &'static TopicTips> {
        self.topics.iter()
    }

    pub fn questions(&self) -> impl Iterator<Item = &'static QaEntry> {
        self.questions.iter()
    }

    pub fn sentiments(&self) -> impl Iterator<Item = &'static SentimentReply> {
        self.sentiments.iter()
    }
}

/// Rejects empty, non-lowercase or duplicated keys.
fn check_keys<'a>(kind: &str, keys: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(BotError::MalformedTable(format!("empty {}", kind)).into());
        }
        if key != key.to_lowercase() {
            return Err(
                BotError::MalformedTable(format!("{} '{}' is not lowercase", kind, key)).into(),
            );
        }
        if !seen.insert(key) {
            return Err(BotError::MalformedTable(format!("duplicate {} '{}'", kind, key)).into());
        }
    }
    Ok(())
}
