//! Insight Guide - an interactive terminal implementation guide for Insight CLI
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use iguide_app::config::{default_config_path, init_config_file, load_settings};
use iguide_core::logging;
use iguide_core::TargetOs;

/// Insight Guide - interactive implementation guide for Insight CLI
#[derive(Parser, Debug)]
#[command(name = "iguide", version)]
#[command(about = "Interactive implementation guide for Insight CLI", long_about = None)]
struct Args {
    /// Show commands for this OS: "unix" or "windows" (overrides config)
    #[arg(long, value_name = "OS")]
    os: Option<TargetOs>,

    /// Print the guide as plain text and exit
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print the guide document as JSON and exit
    #[arg(long)]
    json: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file (if none exists) and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file; a guide without logs is still a guide
    if let Err(e) = logging::init() {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    let config_path = args.config.unwrap_or_else(default_config_path);

    if args.init_config {
        if init_config_file(&config_path)? {
            println!("Created {}", config_path.display());
        } else {
            println!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    // Precedence: CLI flag > config file > built-in default
    let mut settings = load_settings(&config_path);
    if let Some(os) = args.os {
        settings.behavior.default_os = os;
    }

    let os = settings.behavior.default_os;
    tracing::debug!("Using config {} (os={})", config_path.display(), os);

    if args.json {
        headless::write_json(&mut std::io::stdout().lock(), os)?;
    } else if args.print {
        headless::write_text(&mut std::io::stdout().lock(), os)?;
    } else {
        iguide_tui::run(settings).await?;
    }

    Ok(())
}
