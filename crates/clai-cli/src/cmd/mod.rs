pub mod log;
pub mod prompt;
pub mod reset;
pub mod setting;
pub mod status;

use clai_core::{Command, Setting, Settings, Store};

/// Run exactly one command against the workspace.
pub fn dispatch(store: &Store, settings: &Settings, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Status => status::run(settings),
        Command::Help => status::help(settings),
        Command::SetModel(name) => setting::run(store, Setting::Model, &name),
        Command::SetSystemMessage(text) => setting::run(store, Setting::SystemMessage, &text),
        Command::NewConversation => reset::new_conversation(store),
        Command::ClearAll => reset::clear_all(store),
        Command::ShowLog => log::show(store),
        Command::PurgeLog => log::purge(store),
        Command::Prompt(text) => prompt::run(store, settings, &text),
    }
}
