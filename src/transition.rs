//! Visual transition controller.
//!
//! A transition is driven in three steps: `enter` inserts the incoming image
//! off-screen on its entry side, `trigger` (on the next frame) arms the
//! movement of both images, and `settle` drops the outgoing image and leaves
//! the incoming one in its resting state.

use std::fmt;

use crate::error::Result;
use crate::stage::{ElementId, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,  // New image comes in from the right
    Backward, // New image comes in from the left
}

impl Direction {
    pub fn between(current: usize, target: usize) -> Self {
        if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn enter_class(self) -> VisualClass {
        match self {
            Direction::Forward => VisualClass::EnterRight,
            Direction::Backward => VisualClass::EnterLeft,
        }
    }

    pub fn exit_class(self) -> VisualClass {
        match self {
            Direction::Forward => VisualClass::ExitLeft,
            Direction::Backward => VisualClass::ExitRight,
        }
    }
}

/// Transient classes an image element carries during a transition.
///
/// Declaration order is the stylesheet's rule order: later rules win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VisualClass {
    EnterLeft,
    EnterRight,
    EnterActive,
    ExitLeft,
    ExitRight,
}

impl VisualClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualClass::EnterLeft => "enter-left",
            VisualClass::EnterRight => "enter-right",
            VisualClass::EnterActive => "enter-active",
            VisualClass::ExitLeft => "exit-left",
            VisualClass::ExitRight => "exit-right",
        }
    }
}

impl fmt::Display for VisualClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub target: usize,
    pub direction: Direction,
    pub incoming: ElementId,
    pub outgoing: ElementId,
}

impl Transition {
    pub fn enter<S: Stage>(
        stage: &mut S,
        src: &str,
        current: usize,
        target: usize,
        outgoing: ElementId,
    ) -> Self {
        let direction = Direction::between(current, target);
        let incoming = stage.create_image(src, target);
        stage.add_class(incoming, direction.enter_class());
        Self { target, direction, incoming, outgoing }
    }

    pub fn trigger<S: Stage>(&self, stage: &mut S) {
        stage.add_class(self.incoming, VisualClass::EnterActive);
        stage.add_class(self.outgoing, self.direction.exit_class());
    }

    /// Always leaves the incoming image at rest, even when the outgoing one
    /// was already removed from the container.
    pub fn settle<S: Stage>(&self, stage: &mut S) -> Result<()> {
        let removed = stage.remove_element(self.outgoing);
        stage.remove_class(self.incoming, self.direction.enter_class());
        stage.remove_class(self.incoming, VisualClass::EnterActive);
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(Direction::between(0, 3), Direction::Forward);
        assert_eq!(Direction::between(3, 1), Direction::Backward);
    }

    #[test]
    fn test_direction_classes() {
        assert_eq!(Direction::Forward.enter_class().as_str(), "enter-right");
        assert_eq!(Direction::Forward.exit_class().as_str(), "exit-left");
        assert_eq!(Direction::Backward.enter_class().as_str(), "enter-left");
        assert_eq!(Direction::Backward.exit_class().as_str(), "exit-right");
    }

    #[test]
    fn test_class_display() {
        assert_eq!(VisualClass::EnterActive.to_string(), "enter-active");
    }
}
