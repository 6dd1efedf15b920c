//! Slideshow configuration

use std::fs;
use std::path::Path;

use anyhow::{Context, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer};

use crate::constants::*;

/// What a tab click does while a transition is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReentryPolicy {
    /// Replay the latest click once the running transition settles
    #[default]
    Queue,
    /// Drop the click
    Ignore,
    /// Settle the running transition at once, then start the new one
    Restart,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TabConfig {
    pub label: String,
    /// Embedded image index, kept raw and parsed like any other tab attribute
    #[serde(deserialize_with = "raw_index")]
    pub index: String,
}

// Accepts `index = 2` as well as `index = "2"`
fn raw_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndex {
        Number(i64),
        Text(String),
    }

    Ok(match RawIndex::deserialize(deserializer)? {
        RawIndex::Number(n) => n.to_string(),
        RawIndex::Text(s) => s,
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
    /// Shared by the widget's cleanup timer and the slide transition duration
    pub settle_delay: f32,
    pub reentry: ReentryPolicy,
    /// Explicit tab strip; one tab per image when empty
    pub tabs: Vec<TabConfig>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            title: "Slideshow".into(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            settle_delay: SETTLE_DELAY,
            reentry: ReentryPolicy::default(),
            tabs: Vec::new(),
        }
    }
}

impl SlideshowConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.settle_delay.is_finite() && self.settle_delay > 0.0,
            "settle_delay must be a positive number of seconds, got {}",
            self.settle_delay
        );
        ensure!(self.fps > 0, "fps must be non-zero");
        ensure!(
            self.window_width > 0 && self.window_height > TAB_ROW_HEIGHT + TAB_GAP,
            "window is too small ({}x{})",
            self.window_width,
            self.window_height
        );
        Ok(())
    }
}
