//! Tabbed slideshow widget
//!
//! Owns the image list, the tab collection and the transition state machine:
//! ```text
//! Idle
//!   ↓ tab click (different index)
//! Entering       incoming image placed off-screen on its entry side
//!   ↓ next frame
//! Transitioning  both images moving
//!   ↓ settle delay elapsed (counted from the click)
//! Idle           incoming image is current, outgoing removed
//! ```
//! The current index and element only change when a transition settles, so
//! the direction of a later click is always computed against what is on
//! screen.

use tracing::{debug, info, warn};

use crate::config::{ReentryPolicy, SlideshowConfig};
use crate::constants::SETTLE_DELAY;
use crate::error::{Result, SlideshowError};
use crate::stage::{ElementId, Stage, TabId};
use crate::state::TransitionState;
use crate::tab::{Tab, parse_index_attr};
use crate::transition::{Direction, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetOptions {
    pub settle_delay: f32,
    pub reentry: ReentryPolicy,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self { settle_delay: SETTLE_DELAY, reentry: ReentryPolicy::default() }
    }
}

impl From<&SlideshowConfig> for WidgetOptions {
    fn from(config: &SlideshowConfig) -> Self {
        Self { settle_delay: config.settle_delay, reentry: config.reentry }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The tab already shows the current image
    Unchanged,
    Started(Direction),
    /// Will be replayed when the running transition settles
    Queued,
    Ignored,
}

pub struct SlideshowWidget<S: Stage> {
    stage: S,
    images: Vec<String>,
    tabs: Vec<Tab>,
    current_index: usize,
    current_element: ElementId,
    state: TransitionState,
    options: WidgetOptions,
    queued: Option<TabId>,
}

impl<S: Stage> SlideshowWidget<S> {
    pub fn new(mut stage: S, images: Vec<String>, options: WidgetOptions) -> Result<Self> {
        if images.is_empty() {
            return Err(SlideshowError::EmptyImageList);
        }

        let current_element = stage.active_image();
        let raw = stage.image_index_attr(current_element);
        let current_index = match parse_index_attr(raw.as_deref()) {
            Some(index) if index < images.len() => index,
            Some(index) => {
                warn!(index, count = images.len(), "Initial image index out of range, showing the first image");
                0
            }
            None => {
                debug!(attr = ?raw, "No usable initial image index, showing the first image");
                0
            }
        };
        stage.set_image_source(current_element, &images[current_index]);

        let tabs = stage
            .tabs()
            .into_iter()
            .map(|id| {
                let mut tab = Tab { id, index: parse_index_attr(stage.tab_index_attr(id).as_deref()), active: false };
                tab.active = tab.points_at(current_index);
                stage.set_tab_active(id, tab.active);
                tab
            })
            .collect::<Vec<_>>();

        info!(images = images.len(), tabs = tabs.len(), current_index, "Slideshow initialized");

        Ok(Self {
            stage,
            images,
            tabs,
            current_index,
            current_element,
            state: TransitionState::Idle,
            options,
            queued: None,
        })
    }

    pub fn preload(&mut self) {
        for src in &self.images {
            debug!(src = %src, "Preloading image");
            self.stage.preload(src);
        }
    }

    pub fn click_tab(&mut self, tab: TabId) -> Result<ClickOutcome> {
        let index = self.tab_target(tab)?;

        if !self.is_idle() {
            match self.options.reentry {
                ReentryPolicy::Ignore => {
                    debug!(%tab, "Transition running, click ignored");
                    return Ok(ClickOutcome::Ignored);
                }
                ReentryPolicy::Queue => {
                    debug!(%tab, "Transition running, click queued");
                    self.queued = Some(tab);
                    return Ok(ClickOutcome::Queued);
                }
                ReentryPolicy::Restart => {
                    if self.state.transition().map(|t| t.target) == Some(index) {
                        return Ok(ClickOutcome::Unchanged);
                    }
                    debug!(%tab, "Transition running, settling it early");
                    self.settle();
                }
            }
        }

        if index == self.current_index {
            return Ok(ClickOutcome::Unchanged);
        }

        Ok(ClickOutcome::Started(self.begin(tab, index)))
    }

    /// Advances the widget by one rendered frame of `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let elapsed = match self.state {
            TransitionState::Idle => return,
            TransitionState::Entering { transition, elapsed } => {
                transition.trigger(&mut self.stage);
                debug!(target_index = transition.target, "Transition triggered");
                let elapsed = elapsed + dt;
                self.state = TransitionState::Transitioning { transition, elapsed };
                elapsed
            }
            TransitionState::Transitioning { transition, elapsed } => {
                let elapsed = elapsed + dt;
                self.state = TransitionState::Transitioning { transition, elapsed };
                elapsed
            }
        };

        if elapsed >= self.options.settle_delay {
            self.settle();
            self.replay_queued();
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_element(&self) -> ElementId {
        self.current_element
    }

    #[cfg(test)]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    #[cfg(test)]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == TransitionState::Idle
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    fn tab_target(&self, tab: TabId) -> Result<usize> {
        let index = self
            .tabs
            .iter()
            .find(|t| t.id == tab)
            .ok_or(SlideshowError::UnknownTab(tab))?
            .index
            .ok_or(SlideshowError::UnindexedTab(tab))?;
        if index >= self.images.len() {
            return Err(SlideshowError::IndexOutOfRange { index, count: self.images.len() });
        }
        Ok(index)
    }

    fn begin(&mut self, tab: TabId, index: usize) -> Direction {
        for t in self.tabs.iter_mut() {
            t.active = t.id == tab;
            self.stage.set_tab_active(t.id, t.active);
        }

        let transition = Transition::enter(
            &mut self.stage,
            &self.images[index],
            self.current_index,
            index,
            self.current_element,
        );
        info!(
            from = self.current_index,
            to = index,
            direction = ?transition.direction,
            "Transition started"
        );
        self.state = TransitionState::Entering { transition, elapsed: 0.0 };
        transition.direction
    }

    fn settle(&mut self) {
        let Some(transition) = self.state.transition().copied() else {
            return;
        };
        if let Err(e) = transition.settle(&mut self.stage) {
            warn!(error = %e, "Outgoing image already gone");
        }
        self.current_index = transition.target;
        self.current_element = transition.incoming;
        self.state = TransitionState::Idle;
        info!(current_index = self.current_index, "Transition settled");
    }

    fn replay_queued(&mut self) {
        let Some(tab) = self.queued.take() else {
            return;
        };
        match self.click_tab(tab) {
            Ok(outcome) => debug!(%tab, ?outcome, "Queued click replayed"),
            Err(e) => warn!(%tab, error = %e, "Queued click dropped"),
        }
    }
}
