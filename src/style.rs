//! Stylesheet for image elements.
//!
//! Rules are applied in `VisualClass` order on top of the resting style, each
//! overriding the previous one, so `enter-active` wins over `enter-right`.

use std::collections::BTreeSet;

use crate::transition::VisualClass;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    pub offset: f32,  // Horizontal offset in viewport widths
    pub opacity: f32,
}

impl Visual {
    pub const RESTING: Visual = Visual { offset: 0.0, opacity: 1.0 };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub visual: Visual,
    /// Whether reaching `visual` is eased over the transition duration
    pub animated: bool,
}

fn rule(class: VisualClass) -> ComputedStyle {
    match class {
        VisualClass::EnterLeft => ComputedStyle { visual: Visual { offset: -1.0, opacity: 0.0 }, animated: false },
        VisualClass::EnterRight => ComputedStyle { visual: Visual { offset: 1.0, opacity: 0.0 }, animated: false },
        VisualClass::EnterActive => ComputedStyle { visual: Visual::RESTING, animated: true },
        VisualClass::ExitLeft => ComputedStyle { visual: Visual { offset: -1.0, opacity: 0.0 }, animated: true },
        VisualClass::ExitRight => ComputedStyle { visual: Visual { offset: 1.0, opacity: 0.0 }, animated: true },
    }
}

pub fn compute(classes: &BTreeSet<VisualClass>) -> ComputedStyle {
    classes
        .iter()
        .fold(ComputedStyle { visual: Visual::RESTING, animated: false }, |_, class| rule(*class))
}
