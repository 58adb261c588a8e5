use crate::completer::OpenAiCompleter;
use crate::output;
use anyhow::Context;
use clai_core::{run_turn, Settings, Store};
use openai_chat::{ChatClient, ClientOptions};

/// Anything that is not a command: send it as the next user turn.
pub fn run(store: &Store, settings: &Settings, text: &str) -> anyhow::Result<()> {
    let opts = ClientOptions::from_env().context("cannot reach the completion service")?;
    let completer = OpenAiCompleter::new(ChatClient::new(opts)?);

    run_turn(store, settings, text, &completer, output::reply)?;
    Ok(())
}
