//! raylib window hosting the slideshow: image container, tab strip and
//! texture cache.

use std::collections::HashMap;
use std::path::Path;

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::config::SlideshowConfig;
use crate::constants::*;
use crate::error::{Result, SlideshowError};
use crate::slide::Slide;
use crate::stage::{ElementId, Stage, TabId};
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::transition::VisualClass;

pub struct TabButton {
    pub label: String,
    pub index_attr: Option<String>,
    pub active: bool,
}

impl TabButton {
    /// Tabs from the config, or one tab per image numbered from 1.
    pub fn strip(config: &SlideshowConfig, image_count: usize) -> Vec<TabButton> {
        if config.tabs.is_empty() {
            return (0..image_count)
                .map(|i| TabButton { label: (i + 1).to_string(), index_attr: Some(i.to_string()), active: false })
                .collect();
        }
        config
            .tabs
            .iter()
            .map(|tab| TabButton { label: tab.label.clone(), index_attr: Some(tab.index.clone()), active: false })
            .collect()
    }
}

pub struct WindowStage {
    container: Vec<Slide>, // Paint order: later slides on top
    active: ElementId,
    next_id: u32,
    tabs: Vec<TabButton>,

    // None marks a source that failed to load, drawn as a broken image
    textures: HashMap<String, Option<Texture2D>>,
    transition_duration: f32,

    // Dropped last so textures are unloaded before the window closes
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl WindowStage {
    pub fn open(config: &SlideshowConfig, initial_index_attr: Option<String>, tabs: Vec<TabButton>) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(config.window_width, config.window_height)
            .title(&config.title)
            .vsync()
            .resizable()
            .build();
        rl.set_target_fps(config.fps);
        rl.set_trace_log(TraceLogLevel::LOG_ERROR);

        let active = ElementId(0);
        let initial = Slide::new(active, String::new(), initial_index_attr, config.settle_delay);

        Self {
            container: vec![initial],
            active,
            next_id: 1,
            tabs,
            textures: HashMap::new(),
            transition_duration: config.settle_delay,
            rl,
            thread,
        }
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn frame_time(&self) -> f32 {
        self.rl.get_frame_time()
    }

    /// The tab under a left click this frame, if any.
    pub fn poll_tab_click(&self) -> Option<TabId> {
        if !self.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            return None;
        }
        let mouse = self.rl.get_mouse_position();
        let screen_width = self.rl.get_screen_width();
        let screen_height = self.rl.get_screen_height();
        let count = self.tabs.len();
        (0..count)
            .find(|&i| tab_rect(i, count, screen_width, screen_height).check_collision_point_rec(mouse))
            .map(TabId)
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.container.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn render(&mut self) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::BLACK);

        let screen_width = d.get_screen_width();
        let screen_height = d.get_screen_height();
        let count = self.tabs.len();
        let bar_height = tab_bar_height(count, screen_width);
        let area = Rectangle::new(0.0, 0.0, screen_width as f32, (screen_height - bar_height) as f32);

        for slide in self.container.iter() {
            let texture = self.textures.get(&slide.src).and_then(Option::as_ref);
            slide.draw(&mut d, texture, area);
        }

        d.draw_rectangle(0, screen_height - bar_height, screen_width, bar_height, Color::new(24, 24, 24, 255));
        for (i, tab) in self.tabs.iter().enumerate() {
            let rect = tab_rect(i, count, screen_width, screen_height);
            let (fill, text) = if tab.active {
                (Color::new(230, 230, 230, 255), Color::BLACK)
            } else {
                (Color::new(60, 60, 60, 255), Color::LIGHTGRAY)
            };
            d.draw_rectangle_rec(rect, fill);
            d.draw_text(
                &tab.label,
                rect.x as i32 + TAB_GAP,
                (rect.y + (rect.height - TAB_FONT_SIZE as f32) * 0.5) as i32,
                TAB_FONT_SIZE,
                text,
            );
        }
    }

    fn ensure_texture(&mut self, src: &str) {
        if src.is_empty() || self.textures.contains_key(src) {
            return;
        }
        let texture = match load_texture_with_exif_rotation(&mut self.rl, &self.thread, Path::new(src)) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!(src = %src, error = %e, "Failed to load image");
                None
            }
        };
        self.textures.insert(src.to_string(), texture);
    }

    fn slide(&self, element: ElementId) -> Option<&Slide> {
        self.container.iter().find(|slide| slide.id == element)
    }

    fn slide_mut(&mut self, element: ElementId) -> Option<&mut Slide> {
        self.container.iter_mut().find(|slide| slide.id == element)
    }
}

// Tabs per row and tab width: tabs shrink to share the width, then wrap
fn tab_layout(count: usize, screen_width: i32) -> (usize, f32) {
    let available = (screen_width - TAB_GAP).max(TAB_MIN_WIDTH + TAB_GAP);
    let fits = (available / (TAB_MIN_WIDTH + TAB_GAP)).max(1) as usize;
    let per_row = count.clamp(1, fits);
    let width = (available as f32 / per_row as f32 - TAB_GAP as f32).min(TAB_WIDTH as f32);
    (per_row, width)
}

fn tab_bar_height(count: usize, screen_width: i32) -> i32 {
    let (per_row, _) = tab_layout(count, screen_width);
    let rows = count.div_ceil(per_row).max(1) as i32;
    rows * TAB_ROW_HEIGHT + TAB_GAP
}

fn tab_rect(i: usize, count: usize, screen_width: i32, screen_height: i32) -> Rectangle {
    let (per_row, width) = tab_layout(count, screen_width);
    let top = screen_height - tab_bar_height(count, screen_width) + TAB_GAP;
    let (row, column) = (i / per_row, i % per_row);
    Rectangle::new(
        TAB_GAP as f32 + column as f32 * (width + TAB_GAP as f32),
        (top + row as i32 * TAB_ROW_HEIGHT) as f32,
        width,
        (TAB_ROW_HEIGHT - TAB_GAP) as f32,
    )
}

impl Stage for WindowStage {
    fn active_image(&self) -> ElementId {
        self.active
    }

    fn image_index_attr(&self, element: ElementId) -> Option<String> {
        self.slide(element).and_then(|slide| slide.index_attr.clone())
    }

    fn set_image_source(&mut self, element: ElementId, src: &str) {
        self.ensure_texture(src);
        if let Some(slide) = self.slide_mut(element) {
            slide.src = src.to_string();
        }
    }

    fn tabs(&self) -> Vec<TabId> {
        (0..self.tabs.len()).map(TabId).collect()
    }

    fn tab_index_attr(&self, tab: TabId) -> Option<String> {
        self.tabs.get(tab.0).and_then(|t| t.index_attr.clone())
    }

    fn set_tab_active(&mut self, tab: TabId, active: bool) {
        if let Some(t) = self.tabs.get_mut(tab.0) {
            t.active = active;
        }
    }

    fn preload(&mut self, src: &str) {
        debug!(src = %src, "Caching texture");
        self.ensure_texture(src);
    }

    fn create_image(&mut self, src: &str, index: usize) -> ElementId {
        self.ensure_texture(src);
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.container.push(Slide::new(id, src.to_string(), Some(index.to_string()), self.transition_duration));
        id
    }

    fn add_class(&mut self, element: ElementId, class: VisualClass) {
        if let Some(slide) = self.slide_mut(element) {
            slide.add_class(class);
        }
    }

    fn remove_class(&mut self, element: ElementId, class: VisualClass) {
        if let Some(slide) = self.slide_mut(element) {
            slide.remove_class(class);
        }
    }

    fn remove_element(&mut self, element: ElementId) -> Result<()> {
        let position = self
            .container
            .iter()
            .position(|slide| slide.id == element)
            .ok_or(SlideshowError::MissingElement(element))?;
        self.container.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TabConfig;

    #[test]
    fn test_default_strip_has_one_tab_per_image() {
        let tabs = TabButton::strip(&SlideshowConfig::default(), 3);
        let labels: Vec<_> = tabs.iter().map(|t| t.label.as_str()).collect();
        let attrs: Vec<_> = tabs.iter().map(|t| t.index_attr.as_deref()).collect();
        assert_eq!(labels, vec!["1", "2", "3"]);
        assert_eq!(attrs, vec![Some("0"), Some("1"), Some("2")]);
    }

    #[test]
    fn test_configured_strip_keeps_raw_attributes() {
        let config = SlideshowConfig {
            tabs: vec![
                TabConfig { label: "Last".into(), index: "2".into() },
                TabConfig { label: "Broken".into(), index: "n/a".into() },
            ],
            ..SlideshowConfig::default()
        };
        let tabs = TabButton::strip(&config, 3);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].label, "Last");
        assert_eq!(tabs[1].index_attr.as_deref(), Some("n/a"));
    }

    fn assert_strip_fits(count: usize) {
        let bar_top = (WINDOW_HEIGHT - tab_bar_height(count, WINDOW_WIDTH)) as f32;
        for i in 0..count {
            let rect = tab_rect(i, count, WINDOW_WIDTH, WINDOW_HEIGHT);
            assert!(rect.x >= 0.0 && rect.x + rect.width <= WINDOW_WIDTH as f32, "tab {} of {}: {:?}", i, count, rect);
            assert!(rect.y >= bar_top && rect.y + rect.height <= WINDOW_HEIGHT as f32, "tab {} of {}: {:?}", i, count, rect);
            assert!(rect.width > 0.0);
        }
    }

    #[test]
    fn test_tab_rects_do_not_overlap() {
        let first = tab_rect(0, 2, WINDOW_WIDTH, WINDOW_HEIGHT);
        let second = tab_rect(1, 2, WINDOW_WIDTH, WINDOW_HEIGHT);
        assert!(first.x + first.width < second.x);
        assert_eq!(first.width, TAB_WIDTH as f32);
    }

    #[test]
    fn test_many_tabs_stay_inside_window() {
        assert_strip_fits(12);
        assert_eq!(tab_bar_height(12, WINDOW_WIDTH), TAB_ROW_HEIGHT + TAB_GAP);

        let last = tab_rect(11, 12, WINDOW_WIDTH, WINDOW_HEIGHT);
        let center = Vector2::new(last.x + last.width * 0.5, last.y + last.height * 0.5);
        let hit = (0..12).find(|&i| tab_rect(i, 12, WINDOW_WIDTH, WINDOW_HEIGHT).check_collision_point_rec(center));
        assert_eq!(hit, Some(11));
    }

    #[test]
    fn test_crowded_strip_wraps_onto_rows() {
        assert_strip_fits(100);
        assert!(tab_bar_height(100, WINDOW_WIDTH) > TAB_ROW_HEIGHT + TAB_GAP);

        let first = tab_rect(0, 100, WINDOW_WIDTH, WINDOW_HEIGHT);
        let last = tab_rect(99, 100, WINDOW_WIDTH, WINDOW_HEIGHT);
        assert!(last.y > first.y);
        assert!(first.width >= TAB_MIN_WIDTH as f32);
    }
}
