//! One prompt/reply exchange against the workspace transcript.
//!
//! The exchange is split into three stages so that nothing reaches disk
//! until the service has answered:
//!
//! ```text
//! PendingTurn::begin       load (or seed) transcript, append user turn  (memory only)
//!     │
//!     ▼
//! PendingTurn::complete    call the Completer  (may fail, nothing saved)
//!     │
//!     ▼
//! CompletedTurn::persist   save transcript, then append audit entry
//! ```

use crate::audit::AuditEntry;
use crate::completion::{Completer, TokenUsage};
use crate::config::Settings;
use crate::error::{ClaiError, Result};
use crate::store::{Loaded, Store};
use crate::transcript::{Role, Transcript};
use tracing::debug;

/// A transcript with the new user turn appended, not yet sent.
#[derive(Debug)]
pub struct PendingTurn {
    model: String,
    transcript: Transcript,
}

impl PendingTurn {
    pub fn begin(store: &Store, settings: &Settings, prompt: &str) -> Result<Self> {
        let mut transcript = match store.load_transcript()? {
            Loaded::Present(t) if !t.is_empty() => t,
            Loaded::Present(_) | Loaded::Absent | Loaded::Corrupted(_) => {
                debug!("starting a new conversation");
                Transcript::seeded(&settings.system_message)
            }
        };
        transcript.push(Role::User, prompt);
        Ok(Self {
            model: settings.model.clone(),
            transcript,
        })
    }

    /// Send the conversation. On failure the pending turn is dropped and
    /// nothing has been written.
    pub fn complete<C: Completer + ?Sized>(mut self, completer: &C) -> Result<CompletedTurn> {
        debug!(model = %self.model, turns = self.transcript.len(), "requesting completion");
        let completion = completer
            .complete(&self.model, self.transcript.turns())
            .map_err(ClaiError::Completion)?;

        let reply = completion.reply.trim().to_string();
        self.transcript.push(Role::Assistant, reply);
        Ok(CompletedTurn {
            transcript: self.transcript,
            usage: completion.usage,
        })
    }
}

/// A transcript ending in the assistant's reply, ready to be saved.
#[derive(Debug)]
pub struct CompletedTurn {
    transcript: Transcript,
    usage: TokenUsage,
}

impl CompletedTurn {
    pub fn reply(&self) -> &str {
        self.transcript
            .last()
            .map(|t| t.content.as_str())
            .unwrap_or_default()
    }

    /// Overwrite the transcript, then append the audit entry. The log append
    /// only happens once the transcript is safely on disk.
    pub fn persist(&self, store: &Store) -> Result<()> {
        store.save_transcript(&self.transcript)?;
        let entry = AuditEntry::now(self.usage, &self.transcript);
        store.append_log(&entry.render())
    }
}

/// Run a whole exchange. `on_reply` sees the reply after the service has
/// answered and before anything is written.
pub fn run_turn<C, F>(
    store: &Store,
    settings: &Settings,
    prompt: &str,
    completer: &C,
    on_reply: F,
) -> Result<CompletedTurn>
where
    C: Completer + ?Sized,
    F: FnOnce(&str),
{
    let done = PendingTurn::begin(store, settings, prompt)?.complete(completer)?;
    on_reply(done.reply());
    done.persist(store)?;
    Ok(done)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
