use anyhow::Result;
use clap::{Parser, Subcommand};
use layerconf_config::{LoaderOptions, Registry, UpdateMode, UpdateWatcher};
use layerconf_sections::Sections;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layerconf", about = "Layered YAML configuration registry")]
struct Cli {
    /// Bootstrap file (default: $CONFIG_PATH, then config/app.yaml or config/app.yml).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    /// Comma-separated files to chain after the bootstrap (default: $config).
    #[arg(long, value_name = "LIST", global = true)]
    chain: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the merged configuration as JSON.
    Show {
        /// Only print this top-level section.
        section: Option<String>,
    },
    /// Apply a file as a runtime update now and whenever it changes.
    Watch {
        /// File holding the update payload.
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
        /// `merge` or `overwrite` (default: the `nacos.mode` setting).
        #[arg(short, long)]
        mode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut options = LoaderOptions::from_env();
    if let Some(path) = cli.config {
        options = options.with_path(path);
    }
    if let Some(chain) = cli.chain {
        options = options.with_chain(chain);
    }
    let registry = Arc::new(Registry::new(options));

    match cli.command {
        Commands::Show { section } => cmd_show(&registry, section.as_deref()),
        Commands::Watch { file, mode } => cmd_watch(registry, file, mode).await,
    }
}

fn cmd_show(registry: &Registry, section: Option<&str>) -> Result<()> {
    registry.init();
    let json = match section {
        Some(name) => {
            let value = registry
                .raw_section(name)
                .ok_or_else(|| anyhow::anyhow!("no section named '{name}'"))?;
            serde_json::to_string_pretty(&value)?
        }
        None => serde_json::to_string_pretty(&registry.snapshot())?,
    };
    println!("{json}");
    Ok(())
}

async fn cmd_watch(registry: Arc<Registry>, file: PathBuf, mode: Option<String>) -> Result<()> {
    let sections = Sections::register(&registry);
    let mode = mode.map_or_else(
        || sections.nacos.load().update_mode(),
        |m| UpdateMode::from_label(&m),
    );

    let server = sections.server.clone();
    let watcher = Arc::new(
        UpdateWatcher::new(Arc::clone(&registry), &file, mode).with_on_update(move |_| {
            tracing::info!(server = ?*server.load(), "server section after update");
        }),
    );
    watcher
        .apply()
        .map_err(|e| anyhow::anyhow!("initial update from {} failed: {e}", file.display()))?;

    let guard = Arc::clone(&watcher)
        .watch()
        .map_err(|e| anyhow::anyhow!("cannot watch {}: {e}", file.display()))?;

    tokio::signal::ctrl_c().await?;
    guard.stop().await;
    eprintln!("stopped watching {}", file.display());
    Ok(())
}
