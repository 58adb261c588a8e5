use crate::output;
use anyhow::Context;
use clai_core::{Setting, Store};

/// `clai model <name>` / `clai system <text>`: overwrite the directory override.
pub fn run(store: &Store, setting: Setting, value: &str) -> anyhow::Result<()> {
    store
        .save_setting(setting, value)
        .with_context(|| format!("failed to save {}", setting.label()))?;

    let label = match setting {
        Setting::Model => "Model",
        Setting::SystemMessage => "System Message",
    };
    output::notice(&format!("{label}: {}", value.trim()));
    Ok(())
}
