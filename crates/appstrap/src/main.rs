//! Appstrap - Entry Point
//!
//! Binary entry point: validates the application directory, merges the
//! configuration sources given on the command line, builds the service
//! registry and reports what was registered. Useful as a deployment
//! smoke check and as the reference wiring for embedding the library.

use anyhow::Context;
use appstrap_infrastructure::config::ConfigFormat;
use appstrap_infrastructure::logging::{init_logging, LoggingConfig};
use appstrap_infrastructure::Bootstrapper;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command line interface for the application bootstrapper
#[derive(Parser, Debug)]
#[command(name = "appstrap")]
#[command(about = "Bootstrap an application directory and report its services")]
#[command(version)]
pub struct Cli {
    /// Application directory (must contain a writable `temp/`)
    #[arg(short, long)]
    pub app_dir: PathBuf,

    /// Configuration source, repeatable; later sources win on conflict
    ///
    /// The format is inferred from the file extension (.json, .toml,
    /// .yaml/.yml).
    #[arg(short, long = "config")]
    pub configs: Vec<PathBuf>,

    /// Enable debug mode (widens dispatch exception forwarding)
    #[arg(long)]
    pub debug: bool,

    /// Record plugin loading as disabled
    #[arg(long)]
    pub no_plugins: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut bootstrapper = Bootstrapper::new().with_debug_mode(cli.debug);
    if cli.no_plugins {
        bootstrapper.disable_plugins();
    }

    bootstrapper
        .set_app_directory(&cli.app_dir)
        .with_context(|| format!("Invalid application directory {}", cli.app_dir.display()))?;

    for path in &cli.configs {
        let format = ConfigFormat::from_extension(path)
            .with_context(|| format!("Unsupported configuration source {}", path.display()))?;
        bootstrapper
            .add_configuration(path, format)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?;
    }

    init_logging(&LoggingConfig::from_store(bootstrapper.settings()))?;

    let registry = bootstrapper.build_service_registry()?;
    info!(
        app_dir = %cli.app_dir.display(),
        sources = bootstrapper.settings().sources().len(),
        "Application bootstrapped"
    );
    for name in registry.names() {
        info!(service = %name, "Registered");
    }

    // Module declarations are optional for the smoke check
    if let Ok(modules) = bootstrapper.registered_modules() {
        info!(?modules, "Modules declared in configuration");
    }

    Ok(())
}
