//! In-memory stage that records every mutation, for widget tests.

use std::collections::BTreeSet;

use crate::error::{Result, SlideshowError};
use crate::stage::{ElementId, Stage, TabId};
use crate::transition::VisualClass;

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryImage {
    pub id: ElementId,
    pub src: String,
    pub index_attr: Option<String>,
    pub classes: BTreeSet<VisualClass>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryTab {
    pub index_attr: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassChange {
    Added(ElementId, VisualClass),
    Removed(ElementId, VisualClass),
}

pub struct MemoryStage {
    pub container: Vec<MemoryImage>,
    pub tabs: Vec<MemoryTab>,
    pub preloaded: Vec<String>,
    pub class_log: Vec<ClassChange>,
    pub mutations: usize,
    active: ElementId,
    next_id: u32,
}

impl MemoryStage {
    /// Builds a container holding one active image and one tab per attribute.
    pub fn new(image_attr: Option<&str>, tab_attrs: &[&str]) -> Self {
        let active = ElementId(0);
        Self {
            container: vec![MemoryImage {
                id: active,
                src: String::new(),
                index_attr: image_attr.map(str::to_string),
                classes: BTreeSet::new(),
            }],
            tabs: tab_attrs
                .iter()
                .map(|attr| MemoryTab { index_attr: Some(attr.to_string()), active: true })
                .collect(),
            preloaded: Vec::new(),
            class_log: Vec::new(),
            mutations: 0,
            active,
            next_id: 1,
        }
    }

    /// One tab per image, tab `i` pointing at image `i`.
    pub fn with_tabs(image_attr: Option<&str>, count: usize) -> Self {
        let attrs: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = attrs.iter().map(String::as_str).collect();
        Self::new(image_attr, &refs)
    }

    pub fn image(&self, id: ElementId) -> Option<&MemoryImage> {
        self.container.iter().find(|image| image.id == id)
    }

    pub fn active_tabs(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.active)
            .map(|(i, _)| i)
            .collect()
    }

    fn image_mut(&mut self, id: ElementId) -> Option<&mut MemoryImage> {
        self.container.iter_mut().find(|image| image.id == id)
    }
}

impl Stage for MemoryStage {
    fn active_image(&self) -> ElementId {
        self.active
    }

    fn image_index_attr(&self, element: ElementId) -> Option<String> {
        self.image(element).and_then(|image| image.index_attr.clone())
    }

    fn set_image_source(&mut self, element: ElementId, src: &str) {
        self.mutations += 1;
        if let Some(image) = self.image_mut(element) {
            image.src = src.to_string();
        }
    }

    fn tabs(&self) -> Vec<TabId> {
        (0..self.tabs.len()).map(TabId).collect()
    }

    fn tab_index_attr(&self, tab: TabId) -> Option<String> {
        self.tabs.get(tab.0).and_then(|t| t.index_attr.clone())
    }

    fn set_tab_active(&mut self, tab: TabId, active: bool) {
        self.mutations += 1;
        if let Some(t) = self.tabs.get_mut(tab.0) {
            t.active = active;
        }
    }

    fn preload(&mut self, src: &str) {
        self.preloaded.push(src.to_string());
    }

    fn create_image(&mut self, src: &str, index: usize) -> ElementId {
        self.mutations += 1;
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.container.push(MemoryImage {
            id,
            src: src.to_string(),
            index_attr: Some(index.to_string()),
            classes: BTreeSet::new(),
        });
        id
    }

    fn add_class(&mut self, element: ElementId, class: VisualClass) {
        self.mutations += 1;
        self.class_log.push(ClassChange::Added(element, class));
        if let Some(image) = self.image_mut(element) {
            image.classes.insert(class);
        }
    }

    fn remove_class(&mut self, element: ElementId, class: VisualClass) {
        self.mutations += 1;
        self.class_log.push(ClassChange::Removed(element, class));
        if let Some(image) = self.image_mut(element) {
            image.classes.remove(&class);
        }
    }

    fn remove_element(&mut self, element: ElementId) -> Result<()> {
        self.mutations += 1;
        let before = self.container.len();
        self.container.retain(|image| image.id != element);
        if self.container.len() == before {
            return Err(SlideshowError::MissingElement(element));
        }
        Ok(())
    }
}
