//! Document abstraction the slideshow widget mutates.
//!
//! A stage owns the image container, the initially active image element and
//! the tab controls. The widget never holds element handles beyond the opaque
//! ids handed out here, so any host (a window, or the in-memory stage used by
//! the tests) can sit behind it.

use std::fmt;

use crate::error::Result;
use crate::transition::VisualClass;

#[cfg(test)]
pub mod memory;
pub mod window;

/// Handle to an image element inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a tab control, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub usize);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tab {}", self.0)
    }
}

pub trait Stage {
    /// The element marked as the active image when the page was built.
    fn active_image(&self) -> ElementId;
    /// Raw embedded image index of an element, if it carries one.
    fn image_index_attr(&self, element: ElementId) -> Option<String>;
    fn set_image_source(&mut self, element: ElementId, src: &str);

    fn tabs(&self) -> Vec<TabId>;
    /// Raw embedded image index of a tab, if it carries one.
    fn tab_index_attr(&self, tab: TabId) -> Option<String>;
    fn set_tab_active(&mut self, tab: TabId, active: bool);

    /// Fetch an image into the cache without displaying it.
    fn preload(&mut self, src: &str);

    /// Append a new image element to the container.
    fn create_image(&mut self, src: &str, index: usize) -> ElementId;
    fn add_class(&mut self, element: ElementId, class: VisualClass);
    fn remove_class(&mut self, element: ElementId, class: VisualClass);
    fn remove_element(&mut self, element: ElementId) -> Result<()>;
}
