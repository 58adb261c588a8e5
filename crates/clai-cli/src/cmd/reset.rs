use crate::output;
use anyhow::Context;
use clai_core::{Artifact, Store};

/// `clai new`: forget the conversation; model, system message and log stay.
pub fn new_conversation(store: &Store) -> anyhow::Result<()> {
    store
        .delete(Artifact::Transcript)
        .context("failed to remove conversation")?;
    output::notice("New conversation");
    Ok(())
}

/// `clai clear`: remove every clai file and the `.clai_local` directory.
pub fn clear_all(store: &Store) -> anyhow::Result<()> {
    store.clear_all().context("failed to remove clai files")?;
    output::notice("clai files removed");
    Ok(())
}
