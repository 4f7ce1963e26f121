#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use contactcard_core::{CardConfig, ShareEndpoint};
use dioxus::desktop::{Config, WindowBuilder};

/// Global session config, set from command line
static CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the session config (set from command line or default)
pub fn get_config() -> CardConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Contact Card - vCard editor with share QR
#[derive(Parser, Debug)]
#[command(name = "contactcard-desktop")]
#[command(about = "Contact Card - edit a contact, export a vCard, share it as a QR code")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory exported cards are saved into (default: your downloads folder)
    #[arg(short, long)]
    download_dir: Option<PathBuf>,

    /// "New contact" endpoint of the contacts service
    #[arg(long)]
    endpoint: Option<String>,

    /// QR size in pixels
    #[arg(long)]
    qr_size: Option<u32>,
}

fn build_config(args: Args) -> anyhow::Result<CardConfig> {
    let mut config = match args.config {
        Some(path) => CardConfig::load(&path)?,
        None => CardConfig::default(),
    };
    if let Some(dir) = args.download_dir {
        config.download_dir = dir;
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = ShareEndpoint::parse(&endpoint)?;
    }
    if let Some(size) = args.qr_size {
        config.qr_size = size;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = build_config(Args::parse())?;

    tracing::info!(
        "Starting with endpoint {} and download dir {:?}",
        config.endpoint,
        config.download_dir
    );

    // Store config globally
    let _ = CONFIG.set(config);

    let window_width = 960.0;
    let window_height = 760.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Contact Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
