use crate::transition::Transition;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TransitionState {
    Idle,                                                 // One image at rest
    Entering { transition: Transition, elapsed: f32 },     // Incoming image placed off-screen, waiting for the next frame
    Transitioning { transition: Transition, elapsed: f32 }, // Both images moving until the settle delay runs out
}

impl TransitionState {
    pub fn transition(&self) -> Option<&Transition> {
        match self {
            TransitionState::Idle => None,
            TransitionState::Entering { transition, .. }
            | TransitionState::Transitioning { transition, .. } => Some(transition),
        }
    }
}
