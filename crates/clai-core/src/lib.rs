//! Directory-scoped conversation state for `clai`.
//!
//! Everything a `clai` invocation reads or writes lives under
//! `<root>/.clai_local/`: the model override, the system-message override,
//! the conversation transcript, and an append-only audit log.

pub mod audit;
pub mod command;
pub mod completion;
pub mod config;
pub mod conversation;
pub mod error;
pub mod io;
pub mod paths;
pub mod store;
pub mod transcript;

pub use command::Command;
pub use completion::{Completer, Completion, TokenUsage};
pub use config::{Defaults, Setting, Settings};
pub use conversation::{run_turn, CompletedTurn, PendingTurn};
pub use error::{BoxError, ClaiError, Result};
pub use store::{Artifact, Loaded, Store};
pub use transcript::{Role, Transcript, Turn};
