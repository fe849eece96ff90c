mod app;
mod convert;
mod panels;
mod states;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use duoview_core::config::ViewerConfig;
use duoview_core::layout::LayoutMode;

#[derive(Parser)]
#[command(name = "duoview-gui", about = "Compare two images with synchronized pan and zoom")]
#[command(version)]
struct Args {
    /// Image to open in the first viewport
    first: Option<PathBuf>,
    /// Image to open in the second viewport
    second: Option<PathBuf>,
    /// Start in overlay layout
    #[arg(long)]
    overlay: bool,
    /// Viewer config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let mut config = match args.config {
        Some(ref path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ViewerConfig::default(),
    };
    if args.overlay {
        config.layout.mode = LayoutMode::Overlay;
    }
    let preload: Vec<PathBuf> = args.first.into_iter().chain(args.second).collect();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Image Comparison Tool"),
        ..Default::default()
    };

    eframe::run_native(
        "Duoview",
        options,
        Box::new(move |_cc| Ok(Box::new(app::DuoviewApp::new(config, preload)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
