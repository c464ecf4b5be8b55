//! View state shared by the portal components.

use std::collections::HashMap;

use super::navigation::Section;
use crate::models::{Category, Exam};

/// Tag of one section load; a load whose tag is no longer current is stale.
pub type Generation = u64;

/// Everything the portal remembers between events.
#[derive(Debug, Default)]
pub struct ViewState {
    listings: HashMap<Category, Vec<Exam>>,
    active_target: Option<Exam>,
    active_section: Section,
    generations: HashMap<Section, Generation>,
    modal_generation: Generation,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            listings: Category::ALL
                .into_iter()
                .map(|category| (category, Vec::new()))
                .collect(),
            ..Self::default()
        }
    }

    /// Last successfully loaded listing of a category.
    pub fn listing(&self, category: Category) -> &[Exam] {
        self.listings
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Replace a category's cached listing wholesale.
    pub fn replace_listing(&mut self, category: Category, exams: Vec<Exam>) {
        self.listings.insert(category, exams);
    }

    pub fn active_target(&self) -> Option<&Exam> {
        self.active_target.as_ref()
    }

    pub fn set_active_target(&mut self, exam: Exam) {
        self.active_target = Some(exam);
    }

    pub fn clear_active_target(&mut self) {
        self.active_target = None;
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn set_active_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Start a load for `section`, superseding any load still in flight.
    pub fn begin_load(&mut self, section: Section) -> Generation {
        let generation = self.generations.entry(section).or_insert(0);
        *generation += 1;
        *generation
    }

    pub fn is_current(&self, section: Section, generation: Generation) -> bool {
        self.generations.get(&section).copied().unwrap_or(0) == generation
    }

    /// Start fetching an exam for the application modal.
    pub fn begin_modal_load(&mut self) -> Generation {
        self.modal_generation += 1;
        self.modal_generation
    }

    pub fn is_current_modal(&self, generation: Generation) -> bool {
        self.modal_generation == generation
    }
}
