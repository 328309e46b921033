//! `logweave` command line.
//!
//! Compiles logging configurations and prints the resulting hierarchy,
//! emits test records, or watches a file and recompiles on change.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::sync::broadcast;

use logweave::config::{load_config, ConfigSource, ConfigWatcher};
use logweave::lifecycle::{bootstrap, reload, BootstrapOptions};
use logweave::observability::init_tracing;
use logweave::{LoggerRegistry, Severity};

#[derive(Parser)]
#[command(name = "logweave")]
#[command(about = "Compile and inspect hierarchical logging configurations", long_about = None)]
struct Cli {
    /// Use the debug fallback when no configuration is given
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a configuration file and print the hierarchy
    Check { path: PathBuf },
    /// Bootstrap from LOGWEAVE_CONFIG / LOGWEAVE_DEBUG and print the hierarchy
    Show,
    /// Emit one record through a component logger
    Emit {
        component: String,
        message: String,
        #[arg(short, long, default_value = "info")]
        level: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Recompile whenever the file changes, until Ctrl-C
    Watch { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(None);

    let registry = LoggerRegistry::new();

    match cli.command {
        Commands::Check { path } => {
            let raw = load_config(&path)?;
            registry.compile(Some(&raw))?;
            print_hierarchy(&registry)?;
        }
        Commands::Show => {
            let options = BootstrapOptions::from_env()?.with_debug(cli.debug);
            bootstrap(&registry, &options)?;
            print_hierarchy(&registry)?;
        }
        Commands::Emit {
            component,
            message,
            level,
            config,
        } => {
            let mut options = BootstrapOptions::default().with_debug(cli.debug);
            if let Some(path) = config {
                options = options.with_source(ConfigSource::Path(path));
            }
            bootstrap(&registry, &options)?;
            let severity = Severity::parse(&level)?;
            registry.get(&component).log(severity, message);
        }
        Commands::Watch { path } => {
            let raw = load_config(&path)?;
            registry.compile(Some(&raw))?;
            print_hierarchy(&registry)?;

            let (watcher, updates) = ConfigWatcher::new(&path);
            let _watcher = watcher.run()?;

            let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = shutdown_tx.send(());
                }
            });

            let reloads = reload::run(registry.clone(), updates, shutdown_rx).await;
            tracing::info!(reloads, "Watch stopped");
            print_hierarchy(&registry)?;
        }
    }

    Ok(())
}

fn print_hierarchy(registry: &LoggerRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let summary = registry.snapshot().summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
