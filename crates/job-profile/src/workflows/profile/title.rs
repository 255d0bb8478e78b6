use std::sync::Arc;

use tracing::{debug, info};

use super::observer::StepObserver;
use super::picker::CandidatePicker;
use super::rules::MAX_TITLES;
use super::selection::{SelectionCap, SelectionSet, ToggleOutcome};
use super::views::SelectionView;

/// Job-title step: pick up to five titles from a searchable pool.
pub struct TitleSelection<O> {
    picker: CandidatePicker,
    observer: Arc<O>,
}

impl<O> TitleSelection<O>
where
    O: StepObserver<SelectionSet>,
{
    pub fn new<I, S>(available_titles: Vec<String>, selected_titles: I, observer: Arc<O>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let picker = CandidatePicker::new(
            available_titles,
            SelectionSet::seeded(selected_titles),
            SelectionCap::AtMost(MAX_TITLES),
        );
        Self { picker, observer }
    }

    /// Override the cap. A seed larger than the cap is kept; it only blocks
    /// further additions.
    pub fn with_max_titles(mut self, max_titles: usize) -> Self {
        self.picker.set_cap(SelectionCap::AtMost(max_titles));
        self
    }

    pub fn available_titles(&self) -> &[String] {
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

    pub fn filtered_titles(&self) -> Vec<&str> {
        self.picker.filtered()
    }

    pub fn max_titles(&self) -> usize {
        match self.picker.cap() {
            SelectionCap::AtMost(limit) => limit,
            SelectionCap::Unbounded => usize::MAX,
        }
    }

    pub fn is_title_enabled(&self, title: &str) -> bool {
        self.picker.is_enabled(title)
    }

    pub fn toggle(&mut self, title: &str) -> ToggleOutcome {
        let outcome = self.picker.toggle(title);
        debug!(
            title,
            outcome = outcome.label(),
            selected = self.selection().len(),
            "title toggled"
        );
        outcome
    }

    pub fn can_continue(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Report the selection upward. Returns `false` without notifying while
    /// the step is incomplete.
    pub fn commit(&self) -> bool {
        if !self.can_continue() {
            debug!("title commit ignored: nothing selected");
            return false;
        }
        info!(selected = self.selection().len(), "title step committed");
        self.observer.changed(self.selection());
        true
    }

    pub fn back(&self) {
        self.observer.back();
    }

    pub fn view(&self) -> SelectionView {
        self.picker.view("title", self.can_continue())
    }
}
