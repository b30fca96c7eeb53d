mod commands;

use clap::Parser;
use lingua_core::config::{self, StoreBackend};
use lingua_core::env::preferred_language_from_env;
use lingua_locale::{Catalog, LocaleManager, ManagerOptions};
use lingua_store::build_store;

#[derive(Parser)]
#[command(
    name = "lingua",
    version,
    about = "Lingua — runtime-extensible translations for multilingual sites"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Path to config file.
    #[arg(short, long, default_value = "lingua.toml")]
    config: String,

    /// Use an in-memory store; nothing is persisted.
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.lingua.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.ephemeral {
        cfg.store.backend = StoreBackend::Memory;
        tracing::info!("Using in-memory store, changes will not be persisted");
    }

    let store = build_store(&cfg.store).await?;
    let catalog = Catalog::builtin()?;
    let mut manager = LocaleManager::new(store, catalog, ManagerOptions::from_config(&cfg));

    let preferred = if cfg.lingua.detect_environment {
        preferred_language_from_env()
    } else {
        None
    };
    manager.initialize(preferred.as_deref()).await;

    let output = commands::handle(cli.command, &mut manager, &cfg.lingua.default_category).await?;
    println!("{output}");
    Ok(())
}
