use std::collections::BTreeSet;

use raylib::prelude::*;

use crate::constants::*;
use crate::stage::ElementId;
use crate::style::{self, Visual};
use crate::transition::VisualClass;

/// One image element of the on-screen container.
pub struct Slide {
    pub id: ElementId,
    pub src: String,
    pub index_attr: Option<String>,

    classes: BTreeSet<VisualClass>,
    visual: Visual,

    transition_duration: f32,
    animation_timer: f32,
    tween_offset: Option<ease::Tween>,
    tween_opacity: Option<ease::Tween>,
}

impl Slide {
    pub fn new(id: ElementId, src: String, index_attr: Option<String>, transition_duration: f32) -> Self {
        Self {
            id,
            src,
            index_attr,
            classes: BTreeSet::new(),
            visual: Visual::RESTING,
            transition_duration,
            animation_timer: 0.0,
            tween_offset: None,
            tween_opacity: None,
        }
    }

    pub fn add_class(&mut self, class: VisualClass) {
        if self.classes.insert(class) {
            self.restyle();
        }
    }

    pub fn remove_class(&mut self, class: VisualClass) {
        if self.classes.remove(&class) {
            self.restyle();
        }
    }

    // Eases from wherever the slide is now, like a CSS transition picking up mid-flight
    fn restyle(&mut self) {
        let computed = style::compute(&self.classes);
        let target = computed.visual;

        if computed.animated && target != self.visual {
            self.animation_timer = 0.0;
            self.tween_offset = Some(ease::Tween::new(ease::cubic_out, self.visual.offset, target.offset, self.transition_duration));
            self.tween_opacity = Some(ease::Tween::new(ease::cubic_out, self.visual.opacity, target.opacity, self.transition_duration));
        } else if !computed.animated {
            self.tween_offset = None;
            self.tween_opacity = None;
            self.visual = target;
        }
    }

    pub fn update(&mut self, dt: f32) {
        let (Some(offset), Some(opacity)) = (self.tween_offset.as_mut(), self.tween_opacity.as_mut()) else {
            return;
        };
        self.visual.offset = offset.apply(dt);
        self.visual.opacity = opacity.apply(dt);

        self.animation_timer += dt;
        if self.animation_timer >= self.transition_duration {
            self.visual = style::compute(&self.classes).visual;
            self.tween_offset = None;
            self.tween_opacity = None;
        }
    }

    /// Draws the slide centered in `area`, shifted by its current offset.
    /// Without a texture the slide shows as an empty frame.
    pub fn draw(&self, d: &mut RaylibDrawHandle, texture: Option<&Texture2D>, area: Rectangle) {
        let alpha = (self.visual.opacity.clamp(0.0, 1.0) * 255.0) as u8;
        if alpha == 0 {
            return;
        }
        let center = Vector2::new(
            area.x + area.width * (0.5 + self.visual.offset),
            area.y + area.height * 0.5,
        );

        let Some(texture) = texture else {
            let (w, h) = (area.width * 0.5, area.height * 0.5);
            d.draw_rectangle_lines(
                (center.x - w * 0.5) as i32,
                (center.y - h * 0.5) as i32,
                w as i32,
                h as i32,
                Color::new(128, 128, 128, alpha),
            );
            return;
        };

        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        // Scale too big images to fit the viewport
        let scale = (area.width * IMAGE_MARGIN / tex_width)
            .min(area.height * IMAGE_MARGIN / tex_height)
            .min(1.0);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x - scaled_width * 0.5, center.y - scaled_height * 0.5, scaled_width, scaled_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> Slide {
        Slide::new(ElementId(1), "a.png".into(), Some("0".into()), SETTLE_DELAY)
    }

    #[test]
    fn test_entry_class_snaps_off_screen() {
        let mut slide = slide();
        slide.add_class(VisualClass::EnterRight);
        assert_eq!(slide.visual, Visual { offset: 1.0, opacity: 0.0 });
        assert!(slide.tween_offset.is_none());
    }

    #[test]
    fn test_enter_active_eases_to_rest() {
        let mut slide = slide();
        slide.add_class(VisualClass::EnterLeft);
        slide.add_class(VisualClass::EnterActive);
        assert!(slide.tween_offset.is_some());

        slide.update(SETTLE_DELAY * 0.5);
        assert!(slide.tween_offset.is_some());
        assert!((-1.0..=0.0).contains(&slide.visual.offset));

        slide.update(SETTLE_DELAY * 0.5);
        assert_eq!(slide.visual, Visual::RESTING);
        assert!(slide.tween_offset.is_none());
    }

    #[test]
    fn test_cleanup_leaves_slide_at_rest() {
        let mut slide = slide();
        slide.add_class(VisualClass::EnterRight);
        slide.add_class(VisualClass::EnterActive);
        slide.update(SETTLE_DELAY);

        slide.remove_class(VisualClass::EnterRight);
        slide.remove_class(VisualClass::EnterActive);
        assert_eq!(slide.visual, Visual::RESTING);
        assert!(slide.classes.is_empty());
    }

    #[test]
    fn test_exit_fades_out() {
        let mut slide = slide();
        slide.add_class(VisualClass::ExitLeft);
        slide.update(SETTLE_DELAY);
        assert_eq!(slide.visual, Visual { offset: -1.0, opacity: 0.0 });
    }
}
