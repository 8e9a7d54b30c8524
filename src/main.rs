//! Lanai - Main entrypoint.
//!
//! Parses the command line, loads configuration, initializes logging and
//! serves the trie over HTTP and WebSocket until interrupted.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lanai_lib::config::{ConfigLoader, LanaiConfig, LogConfig, ENV_PREFIX};
use lanai_lib::data_structures::Trie;
use lanai_lib::dispatcher::Dispatcher;
use lanai_lib::error::{set_error_reporter, TracingErrorReporter};
use lanai_lib::server::Server;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Lanai server.
#[derive(Parser, Debug)]
#[clap(name = "lanai", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the server
    Start {
        /// Port to listen on, overriding the configured address
        #[clap(short, long, value_parser)]
        port: Option<u16>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .with_context(|| format!("invalid log level {:?}", log.level))?;

    let writer = match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log.file.is_none())
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_thread_names(true);

    let installed = if log.json {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    installed.map_err(|e| anyhow!("failed to set global tracing subscriber: {e}"))
}

fn load_config(path: Option<&Path>) -> Result<LanaiConfig> {
    ConfigLoader::new(path, ENV_PREFIX)
        .load()
        .context("failed to load configuration")
}

fn start(config: LanaiConfig) -> Result<()> {
    set_error_reporter(Arc::new(TracingErrorReporter));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.worker_threads)
        .enable_all()
        .build()
        .context("failed to build runtime")?;

    let dispatcher = Arc::new(Dispatcher::with_trie(Trie::with_config(config.trie)));

    info!(
        server = %config.server.name,
        address = %config.server.address,
        workers = config.server.worker_threads,
        "starting Lanai"
    );

    runtime.block_on(async {
        let server = Server::bind(&config.server, dispatcher).await?;
        server.run_until_ctrl_c().await
    })?;

    Ok(())
}

fn generate_config(output: &Path) -> Result<()> {
    let default_config = LanaiConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let toml = toml::to_string_pretty(&default_config).context("failed to serialize config")?;
    std::fs::write(output, toml)
        .with_context(|| format!("failed to write {}", output.display()))?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command.unwrap_or(Command::Start { port: None }) {
        Command::Start { port } => {
            let mut config = load_config(args.config.as_deref())?;
            if let Some(port) = port {
                config.server = config.server.with_port(port);
            }

            init_logging(&config.log)?;
            start(config)
        }
        Command::Validate => {
            let config = load_config(args.config.as_deref())?;
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            generate_config(&output)
        }
    }
}
