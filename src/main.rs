//! linklint - scan design documents for instances detached from their library
//!
//! Loads a host document export, walks the chosen subtree for component
//! instances, audits each one against the document's component index, and
//! prints the resulting issue report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use linklint::config::{get_config_value, set_config_value, ConfigLoader};
use linklint::models::Document;
use linklint::report;
use linklint::services::DocumentResolver;
use linklint::surface::{DocumentSurface, SurfaceBridge};

/// Scan a design document for component instances not linked to a shared library
#[derive(Parser, Debug)]
#[command(name = "linklint")]
#[command(about = "Scan a design document for component instances not linked to a shared library", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a document export
    Scan {
        /// Path to the document JSON export
        document: PathBuf,
        /// Node id to scan from (defaults to the document root)
        #[arg(long)]
        root: Option<String>,
        /// Emit the scan result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "scan.lookupTimeoutMs")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "scan.lookupTimeoutMs")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Initialize logging based on debug flag
/// Returns the log file path if debug logging is enabled
fn init_logging(debug: bool) -> Option<PathBuf> {
    if !debug {
        // No logging by default (silent operation)
        return None;
    }

    // Write logs to a temp file so stdout stays clean for the report
    let temp_file = tempfile::Builder::new()
        .prefix("linklint-")
        .suffix(".log")
        .tempfile()
        .map(|f| {
            let path = f.path().to_path_buf();
            // Keep the file alive for the lifetime of the process
            std::mem::forget(f);
            path
        })
        .unwrap_or_else(|_| {
            std::env::temp_dir().join(format!("linklint-{}.log", std::process::id()))
        });

    match std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&temp_file)
    {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
                )
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .init();
            Some(temp_file)
        }
        Err(_) => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Config { subcommand } => handle_config_command(subcommand).await,
        Command::Scan {
            document,
            root,
            json,
        } => {
            let log_file = init_logging(args.debug);
            if let Some(ref log_path) = log_file {
                eprintln!(
                    "Debug logging enabled. Logs written to: {}",
                    log_path.display()
                );
            }
            handle_scan_command(&document, root, json).await
        }
    }
}

/// Run one scan and print the report
async fn handle_scan_command(path: &Path, root: Option<String>, json: bool) -> Result<()> {
    let config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

    let document = Document::load(path)?;
    tracing::debug!(
        "Loaded document '{}' with {} indexed components",
        document.name,
        document.components.len()
    );

    let root_id = root.unwrap_or_else(|| document.root.id.clone());
    let resolver = DocumentResolver::new(&document);
    let bridge = SurfaceBridge::spawn(
        DocumentSurface::new(document),
        resolver,
        config.scan.audit_options(),
    );

    let result = bridge.scan(Some(root_id)).await?;

    if json {
        let out = serde_json::to_string_pretty(&result).context("Failed to serialize result")?;
        println!("{}", out);
    } else {
        print!("{}", report::render_text(&result));
    }

    if result.total_issues > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Handle configuration subcommands
async fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    use linklint::config::paths;

    match cmd {
        ConfigSubcommand::Get { key } => {
            // Load config (will use defaults if no file exists)
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            let mut config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());

            set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::load() {
            Ok(_) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
