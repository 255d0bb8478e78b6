use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::observer::StepObserver;
use super::salary::{parse_salary_input, SalaryBound, SalaryRange};
use super::selection::{SelectionCap, SelectionSet, ToggleOutcome};
use super::views::{CandidateRow, PreferenceView};

/// Work arrangement, salary expectations, and target locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceState {
    pub work_type: SelectionSet,
    pub salary_range: SalaryRange,
    pub locations: SelectionSet,
}

/// Partial snapshot handed down by the wizard; absent fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceSeed {
    pub work_type: Option<Vec<String>>,
    pub salary_range: Option<SalaryRange>,
    pub locations: Option<Vec<String>>,
}

impl PreferenceSeed {
    pub fn into_state(self, default_salary: SalaryRange) -> PreferenceState {
        PreferenceState {
            work_type: self.work_type.map(SelectionSet::from).unwrap_or_default(),
            salary_range: self.salary_range.unwrap_or(default_salary),
            locations: self.locations.map(SelectionSet::from).unwrap_or_default(),
        }
    }
}

impl From<PreferenceState> for PreferenceSeed {
    fn from(state: PreferenceState) -> Self {
        Self {
            work_type: Some(state.work_type.into()),
            salary_range: Some(state.salary_range),
            locations: Some(state.locations.into()),
        }
    }
}

/// Preference step. Every change is reported upward immediately; completion
/// requires at least one work type and one location.
pub struct PreferenceSelection<O> {
    state: PreferenceState,
    work_type_options: Vec<String>,
    popular_locations: Vec<String>,
    location_input: String,
    observer: Arc<O>,
}

impl<O> PreferenceSelection<O>
where
    O: StepObserver<PreferenceState>,
{
    pub fn new(
        preferences: PreferenceSeed,
        work_type_options: Vec<String>,
        popular_locations: Vec<String>,
        observer: Arc<O>,
    ) -> Self {
        Self::with_default_salary(
            preferences,
            SalaryRange::default(),
            work_type_options,
            popular_locations,
            observer,
        )
    }

    pub fn with_default_salary(
        preferences: PreferenceSeed,
        default_salary: SalaryRange,
        work_type_options: Vec<String>,
        popular_locations: Vec<String>,
        observer: Arc<O>,
    ) -> Self {
        Self {
            state: preferences.into_state(default_salary),
            work_type_options,
            popular_locations,
            location_input: String::new(),
            observer,
        }
    }

    pub fn state(&self) -> &PreferenceState {
        &self.state
    }

    pub fn work_type_options(&self) -> &[String] {
        &self.work_type_options
    }

    pub fn popular_locations(&self) -> &[String] {
        &self.popular_locations
    }

    pub fn location_input(&self) -> &str {
        &self.location_input
    }

    pub fn toggle_work_type(&mut self, work_type: &str) -> ToggleOutcome {
        let outcome = self
            .state
            .work_type
            .toggle(work_type, SelectionCap::Unbounded);
        debug!(work_type, outcome = outcome.label(), "work type toggled");
        self.emit();
        outcome
    }

    /// Apply raw salary text to one bound. Text that does not parse leaves
    /// the range untouched and nothing is emitted.
    pub fn edit_salary(&mut self, bound: SalaryBound, raw: &str) -> bool {
        let Some(value) = parse_salary_input(raw) else {
            warn!(bound = bound.label(), raw, "ignoring non-numeric salary input");
            return false;
        };
        let before = self.state.salary_range;
        self.state.salary_range.set(bound, value);
        if self.state.salary_range == before {
            return false;
        }
        debug!(
            bound = bound.label(),
            min = self.state.salary_range.min(),
            max = self.state.salary_range.max(),
            "salary range edited"
        );
        self.emit();
        true
    }

    pub fn set_location_input(&mut self, text: impl Into<String>) {
        self.location_input = text.into();
    }

    /// Add the trimmed free-text buffer as a location and clear the buffer.
    /// Empty or already selected input is ignored and the buffer is kept.
    pub fn add_location_from_input(&mut self) -> bool {
        let location = self.location_input.trim();
        if location.is_empty() || self.state.locations.contains(location) {
            debug!(location, "free-text location ignored");
            return false;
        }
        let location = location.to_owned();
        debug!(location = location.as_str(), "free-text location added");
        self.state.locations.insert(location);
        self.location_input.clear();
        self.emit();
        true
    }

    pub fn add_suggested_location(&mut self, location: &str) -> bool {
        if !self.state.locations.insert(location) {
            debug!(location, "suggested location already selected");
            return false;
        }
        debug!(location, "suggested location added");
        self.emit();
        true
    }

    pub fn is_suggestion_enabled(&self, location: &str) -> bool {
        !self.state.locations.contains(location)
    }

    pub fn remove_location(&mut self, location: &str) -> bool {
        if !self.state.locations.remove(location) {
            return false;
        }
        debug!(location, "location removed");
        self.emit();
        true
    }

    pub fn can_complete(&self) -> bool {
        !self.state.work_type.is_empty() && !self.state.locations.is_empty()
    }

    pub fn complete(&self) -> bool {
        if !self.can_complete() {
            debug!(
                work_types = self.state.work_type.len(),
                locations = self.state.locations.len(),
                "profile completion ignored: missing work type or location"
            );
            return false;
        }
        info!(
            work_types = self.state.work_type.len(),
            locations = self.state.locations.len(),
            "preference step completed"
        );
        self.observer.complete();
        true
    }

    pub fn back(&self) {
        self.observer.back();
    }

    pub fn view(&self) -> PreferenceView {
        let work_types = self
            .work_type_options
            .iter()
            .map(|option| CandidateRow {
                label: option.clone(),
                selected: self.state.work_type.contains(option),
                disabled: false,
            })
            .collect();

        let suggestions = self
            .popular_locations
            .iter()
            .map(|location| CandidateRow {
                label: location.clone(),
                selected: self.state.locations.contains(location),
                disabled: !self.is_suggestion_enabled(location),
            })
            .collect();

        PreferenceView {
            work_types,
            salary_range: self.state.salary_range,
            location_input: self.location_input.clone(),
            locations: self.state.locations.as_slice().to_vec(),
            suggestions,
            can_complete: self.can_complete(),
        }
    }

    fn emit(&self) {
        self.observer.changed(&self.state);
    }
}
