use crate::completion::TokenUsage;
use crate::transcript::Transcript;
use chrono::{DateTime, Local};
use std::fmt::Write as _;

const RULE_WIDTH: usize = 40;

/// One appended record in `clai_log`: when, how many tokens, and the whole
/// conversation as it stood after the reply.
pub struct AuditEntry<'a> {
    pub timestamp: DateTime<Local>,
    pub usage: TokenUsage,
    pub transcript: &'a Transcript,
}

impl<'a> AuditEntry<'a> {
    pub fn now(usage: TokenUsage, transcript: &'a Transcript) -> Self {
        Self {
            timestamp: Local::now(),
            usage,
            transcript,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = write!(
            out,
            "\n\n=== Chat on {} ===\n\n{}\n\n",
            self.timestamp.format("%a %d %b %Y %H:%M"),
            self.usage
        );
        for turn in self.transcript.turns() {
            let _ = write!(
                out,
                "{}:\n{}\n\n",
                turn.role.as_str().to_uppercase(),
                turn.content
            );
        }
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push_str("\n\n");
        out
    }
}
