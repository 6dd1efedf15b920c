use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod constants;
mod error;
mod slide;
mod stage;
mod state;
mod style;
mod tab;
mod texture_loader;
mod transition;
mod widget;

use crate::config::{ReentryPolicy, SlideshowConfig};
use crate::stage::window::{TabButton, WindowStage};
use crate::texture_loader::collect_image_sources;
use crate::widget::{SlideshowWidget, WidgetOptions};

/// Tabbed image slideshow with sliding transitions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image files, or a single directory of images
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Index of the image shown first; unusable values fall back to 0
    #[arg(long)]
    initial_index: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// What a click does while a transition is running
    #[arg(long, value_enum)]
    reentry: Option<ReentryPolicy>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SlideshowConfig::load(path)?,
        None => SlideshowConfig::default(),
    };
    if let Some(reentry) = args.reentry {
        config.reentry = reentry;
    }

    let images = collect_image_sources(&args.images)?;
    info!(images = images.len(), reentry = ?config.reentry, "Starting slideshow");

    let tabs = TabButton::strip(&config, images.len());
    let stage = WindowStage::open(&config, args.initial_index, tabs);
    let mut widget = SlideshowWidget::new(stage, images, WidgetOptions::from(&config))?;
    widget.preload();

    // --- Main Loop ---
    while !widget.stage().should_close() {
        if let Some(tab) = widget.stage().poll_tab_click() {
            match widget.click_tab(tab) {
                Ok(outcome) => debug!(%tab, ?outcome, "Tab clicked"),
                Err(e) => warn!(%tab, error = %e, "Tab click rejected"),
            }
        }

        let dt = widget.stage().frame_time();
        widget.update(dt);

        let stage = widget.stage_mut();
        stage.update(dt);
        stage.render();
    }

    info!(
        current_index = widget.current_index(),
        current_element = %widget.current_element(),
        "Slideshow closed"
    );
    Ok(())
}
