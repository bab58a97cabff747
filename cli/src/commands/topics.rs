//! # CyberBot Topics Command
//!
//! File: cli/src/commands/topics.rs
//!
//! Lists what the bot understands: the tip topics, the feeling words it
//! reacts to and every question in the question bank, in matching order.
//!
use crate::bot::KnowledgeBase;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `cyberbot topics`.
#[derive(Parser, Debug)]
pub struct TopicsArgs {
    /// Also print every tip for each topic.
    #[arg(long)]
    pub tips: bool,
}

pub fn handle_topics(args: TopicsArgs) -> Result<()> {
    let knowledge = KnowledgeBase::builtin()?;
    let mut stdout = io::stdout().lock();
    render(&knowledge, args.tips, &mut stdout)?;
    stdout.flush().context("Failed to flush stdout")
}

fn render<W: Write>(knowledge: &KnowledgeBase, with_tips: bool, out: &mut W) -> Result<()> {
    writeln!(out, "Topics (mention one for a tip, then say 'tell me more'):")?;
    for topic in knowledge.topics() {
        writeln!(out, "  {:<10} {} tips", topic.topic, topic.tips.len())?;
        if with_tips {
            for tip in topic.tips {
                writeln!(out, "      - {}", tip)?;
            }
        }
    }

    let feelings: Vec<_> = knowledge.sentiments().map(|s| s.keyword).collect();
    writeln!(out, "\nFeelings I respond to: {}", feelings.join(", "))?;

    writeln!(out, "\nQuestions I can answer:")?;
    for entry in knowledge.questions() {
        writeln!(out, "  - {}", entry.trigger)?;
    }
    writeln!(
        out,
        "\nYou can also say \"I'm interested in <topic>\" and later ask me to recommend something."
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(with_tips: bool) -> String {
        let mut out = Vec::new();
        render(&KnowledgeBase::builtin().unwrap(), with_tips, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_lists_topics_feelings_and_questions() {
        let out = rendered(false);
        assert!(out.contains("  phishing   3 tips"));
        assert!(out.contains("Feelings I respond to: worried, curious, frustrated"));
        assert!(out.contains("  - how to prevent shoulder surfing"));
        assert_eq!(out.matches("\n  - ").count(), 30);
        assert!(!out.contains("Use a VPN on public Wi-Fi."));
    }

    #[test]
    fn test_tips_flag_prints_tips() {
        let out = rendered(true);
        assert!(out.contains("      - Use a VPN on public Wi-Fi."));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_errors_are_returned() {
        let err = render(&KnowledgeBase::builtin().unwrap(), false, &mut ClosedPipe).unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
