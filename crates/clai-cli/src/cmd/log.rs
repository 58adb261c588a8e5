use crate::output;
use anyhow::Context;
use clai_core::{Artifact, Store};

/// `clai log`: print the audit log verbatim; prints nothing if there is none.
pub fn show(store: &Store) -> anyhow::Result<()> {
    if let Some(text) = store.read_log().context("failed to read log")? {
        output::log(&text);
    }
    Ok(())
}

/// `clai purge` / `clai del`
pub fn purge(store: &Store) -> anyhow::Result<()> {
    store.delete(Artifact::Log).context("failed to remove log")?;
    output::notice("log purged");
    Ok(())
}
