use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("API key not set: export {0}")]
    MissingApiKey(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidOption { name: &'static str, value: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response body: {source}\n  body: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("response contained no choices")]
    NoChoices,
}
