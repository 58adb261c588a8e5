//! `openai-chat`: minimal blocking client for OpenAI-compatible
//! `POST /chat/completions` endpoints.
//!
//! The crate knows nothing about transcripts on disk or workspaces; it turns
//! a model name plus an ordered list of role-tagged messages into a single
//! reply and its token usage.
//!
//! # Architecture
//!
//! ```text
//! ClientOptions  ← api key, base url, optional timeout (usually from env)
//!     │
//!     ▼
//! ChatClient     ← reqwest::blocking::Client, one request per call
//!     │              POST {base_url}/chat/completions
//!     ▼
//! ChatReply      ← choices[0].message.content + usage counts
//! ```
//!
//! # Quick start
//!
//! ```rust,ignore
//! use openai_chat::{ChatClient, ChatMessage, ClientOptions};
//!
//! let client = ChatClient::new(ClientOptions::from_env()?)?;
//! let reply = client.complete("gpt-4o-mini", &[
//!     ChatMessage::new("system", "You are terse."),
//!     ChatMessage::new("user", "hello"),
//! ])?;
//! println!("{}", reply.content);
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::{ChatClient, ClientOptions, DEFAULT_BASE_URL};
pub use error::ChatError;
pub use types::{ChatMessage, ChatReply, Usage};

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, ChatError>;
