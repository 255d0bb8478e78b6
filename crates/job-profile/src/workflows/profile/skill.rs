use std::sync::Arc;

use tracing::{debug, info};

use super::observer::StepObserver;
use super::picker::CandidatePicker;
use super::rules::MIN_SKILLS;
use super::selection::{SelectionCap, SelectionSet, ToggleOutcome};
use super::views::SelectionView;

/// Skill step: any number of skills, at least three to continue.
pub struct SkillSelection<O> {
    picker: CandidatePicker,
    min_skills: usize,
    observer: Arc<O>,
}

impl<O> SkillSelection<O>
where
    O: StepObserver<SelectionSet>,
{
    pub fn new<I, S>(available_skills: Vec<String>, selected_skills: I, observer: Arc<O>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let picker = CandidatePicker::new(
            available_skills,
            SelectionSet::seeded(selected_skills),
            SelectionCap::Unbounded,
        );
        Self {
            picker,
            min_skills: MIN_SKILLS,
            observer,
        }
    }

    pub fn with_min_skills(mut self, min_skills: usize) -> Self {
        self.min_skills = min_skills;
        self
    }

    pub fn available_skills(&self) -> &[String] {
        self.picker.pool()
    }

    pub fn selection(&self) -> &SelectionSet {
        self.picker.selection()
    }

    pub fn query(&self) -> &str {
        self.picker.search().query()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.picker.set_query(query);
    }

    pub fn filtered_skills(&self) -> Vec<&str> {
        self.picker.filtered()
    }

    pub fn min_skills(&self) -> usize {
        self.min_skills
    }

    pub fn toggle(&mut self, skill: &str) -> ToggleOutcome {
        let outcome = self.picker.toggle(skill);
        debug!(
            skill,
            outcome = outcome.label(),
            selected = self.selection().len(),
            "skill toggled"
        );
        outcome
    }

    pub fn can_continue(&self) -> bool {
        self.selection().len() >= self.min_skills
    }

    pub fn commit(&self) -> bool {
        if !self.can_continue() {
            debug!(
                selected = self.selection().len(),
                required = self.min_skills,
                "skill commit ignored: not enough skills"
            );
            return false;
        }
        info!(selected = self.selection().len(), "skill step committed");
        self.observer.changed(self.selection());
        true
    }

    pub fn back(&self) {
        self.observer.back();
    }

    pub fn view(&self) -> SelectionView {
        self.picker.view("skill", self.can_continue())
    }
}
