//! depviz - Package dependency visualizer
//!
//! Main entry point for the depviz CLI.

use clap::Parser;
use depviz::PackageConfig;
use std::path::PathBuf;
use std::process;

/// Package dependency visualizer: list a package's direct dependencies
#[derive(Parser, Debug)]
#[command(name = "depviz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the XML configuration file
    #[arg(long)]
    config: PathBuf,
}

fn main() {
    // Initialize logging
    if let Err(e) = depviz::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> depviz::Result<()> {
    let config = PackageConfig::load(&cli.config)?;
    tracing::info!(
        package = %config.package_name,
        mode = %config.mode,
        "Configuration loaded"
    );

    let dependencies = depviz::collect_dependencies(&config)?;

    println!("Found dependencies in file:");
    for dependency in &dependencies {
        println!("  - {}", dependency);
    }

    Ok(())
}
