use super::search::SearchFilter;
use super::selection::{SelectionCap, SelectionSet, ToggleOutcome};
use super::views::{CandidateRow, SelectionView};

/// Candidate pool, current picks, and search text shared by the title and
/// skill steps.
#[derive(Debug, Clone)]
pub(crate) struct CandidatePicker {
    pool: Vec<String>,
    selection: SelectionSet,
    search: SearchFilter,
    cap: SelectionCap,
}

impl CandidatePicker {
    pub(crate) fn new(pool: Vec<String>, selection: SelectionSet, cap: SelectionCap) -> Self {
        Self {
            pool,
            selection,
            search: SearchFilter::default(),
            cap,
        }
    }

    pub(crate) fn set_cap(&mut self, cap: SelectionCap) {
        self.cap = cap;
    }

    pub(crate) fn cap(&self) -> SelectionCap {
        self.cap
    }

    pub(crate) fn pool(&self) -> &[String] {
        &self.pool
    }

    pub(crate) fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub(crate) fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub(crate) fn set_query(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    pub(crate) fn filtered(&self) -> Vec<&str> {
        self.search.apply(&self.pool)
    }

    pub(crate) fn toggle(&mut self, value: &str) -> ToggleOutcome {
        self.selection.toggle(value, self.cap)
    }

    /// Whether the control for `value` accepts input. Selected values stay
    /// enabled so they can always be removed.
    pub(crate) fn is_enabled(&self, value: &str) -> bool {
        self.selection.contains(value) || self.cap.admits(self.selection.len())
    }

    pub(crate) fn view(&self, step: &'static str, can_continue: bool) -> SelectionView {
        let candidates = self
            .filtered()
            .into_iter()
            .map(|label| CandidateRow {
                label: label.to_owned(),
                selected: self.selection.contains(label),
                disabled: !self.is_enabled(label),
            })
            .collect();

        let max_selected = match self.cap {
            SelectionCap::Unbounded => None,
            SelectionCap::AtMost(limit) => Some(limit),
        };

        SelectionView {
            step,
            query: self.search.query().to_owned(),
            candidates,
            chips: self.selection.as_slice().to_vec(),
            selected_count: self.selection.len(),
            max_selected,
            can_continue,
        }
    }
}
