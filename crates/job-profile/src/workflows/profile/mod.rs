//! Profile setup steps: job titles, skills, and preferences.
//!
//! Each step owns its state, seeded once from a snapshot supplied by the
//! wizard, and reports through a [`StepObserver`]. Gating never raises
//! errors; blocked actions are no-ops and the matching controls render
//! disabled in the step's view.

pub mod observer;
mod picker;
pub mod preference;
pub mod rules;
pub mod salary;
pub mod script;
pub mod search;
pub mod selection;
pub mod skill;
pub mod title;
pub mod views;

#[cfg(test)]
mod tests;

pub use observer::{EventLog, StepEvent, StepObserver};
pub use preference::{PreferenceSeed, PreferenceSelection, PreferenceState};
pub use rules::{ProfileRules, MAX_TITLES, MIN_SKILLS};
pub use salary::{SalaryBound, SalaryRange};
pub use script::{ActionScript, ProfileAction, ProfileStep, ScriptError, ScriptedAction};
pub use search::SearchFilter;
pub use selection::{SelectionCap, SelectionSet, ToggleOutcome};
pub use skill::SkillSelection;
pub use title::TitleSelection;
pub use views::{CandidateRow, PreferenceView, SelectionView};
