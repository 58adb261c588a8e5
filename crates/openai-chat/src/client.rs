use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::types::{ChatMessage, ChatReply, ChatRequest, ChatResponse, ErrorEnvelope};
use crate::{ChatError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub const API_KEY_ENV: &str = "GPTKEY";
pub const BASE_URL_ENV: &str = "CLAI_BASE_URL";
pub const TIMEOUT_ENV: &str = "CLAI_TIMEOUT_SECS";

// ─── ClientOptions ────────────────────────────────────────────────────────

/// Connection settings for [`ChatClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub base_url: String,
    /// `None` leaves the request unbounded; the call blocks until the server
    /// answers or the connection drops.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Read `GPTKEY`, `CLAI_BASE_URL` and `CLAI_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup, so
    /// tests do not have to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ChatError::MissingApiKey(API_KEY_ENV))?;

        let mut opts = Self::new(api_key);

        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            opts.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| ChatError::InvalidOption {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            opts.timeout = Some(Duration::from_secs(secs));
        }

        Ok(opts)
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

// ─── ChatClient ───────────────────────────────────────────────────────────

/// Blocking chat-completions client. One HTTP request per [`complete`] call,
/// no retries.
///
/// [`complete`]: ChatClient::complete
pub struct ChatClient {
    http: Client,
    opts: ClientOptions,
}

impl ChatClient {
    pub fn new(opts: ClientOptions) -> Result<Self> {
        let http = Client::builder().timeout(opts.timeout).build()?;
        Ok(Self { http, opts })
    }

    /// Send `messages` to `model` and return the first choice.
    pub fn complete(&self, model: &str, messages: &[ChatMessage]) -> Result<ChatReply> {
        let url = self.opts.endpoint();
        debug!(%url, model, messages = messages.len(), "sending chat completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.opts.api_key)
            .json(&ChatRequest { model, messages })
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(status = status.as_u16(), bytes = body.len(), "chat completion response");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.trim().to_string());
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        parse_reply(&body)
    }
}

pub(crate) fn parse_reply(body: &str) -> Result<ChatReply> {
    let parsed: ChatResponse = serde_json::from_str(body).map_err(|source| ChatError::Decode {
        body: body.to_string(),
        source,
    })?;

    let choice = parsed.choices.into_iter().next().ok_or(ChatError::NoChoices)?;

    Ok(ChatReply {
        content: choice.message.content.unwrap_or_default(),
        usage: parsed.usage.unwrap_or_default(),
    })
}
