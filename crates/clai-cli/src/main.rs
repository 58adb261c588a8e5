mod cmd;
mod completer;
mod output;
mod root;

use anyhow::Context;
use clai_core::{Command, Defaults, Settings, Store};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "clai",
    about = "Command Line AI: a per-directory conversation with a chat model",
    version,
    disable_help_flag = true
)]
struct Cli {
    /// Workspace root (default: current directory)
    #[arg(long, env = "CLAI_ROOT")]
    root: Option<PathBuf>,

    /// A command (model, system, new, log, purge, clear, help) or the prompt text
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    if let Err(e) = run(&root, &cli.words) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(root: &Path, words: &[String]) -> anyhow::Result<()> {
    let store = Store::new(root);

    // Even status and help show the effective values, so resolve first.
    let settings = Settings::resolve(&store, &Defaults::from_env())?;
    let command = Command::parse(words)?;

    store
        .ensure_workspace()
        .with_context(|| format!("failed to create {}", store.dir().display()))?;

    cmd::dispatch(&store, &settings, command)
}
