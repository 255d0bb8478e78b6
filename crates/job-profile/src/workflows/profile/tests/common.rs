use std::sync::Arc;

use crate::workflows::profile::{
    EventLog, PreferenceSeed, PreferenceSelection, PreferenceState, SelectionSet, SkillSelection,
    StepEvent, TitleSelection,
};

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

pub(super) fn title_pool() -> Vec<String> {
    strings(&[
        "Backend Engineer",
        "Frontend Engineer",
        "DevOps",
        "QA",
        "PM",
        "Data Scientist",
        "engineering manager",
        "Product Designer",
    ])
}

pub(super) fn skill_pool() -> Vec<String> {
    strings(&["Rust", "Go", "SQL", "Docker", "Kubernetes", "React", "TypeScript"])
}

pub(super) fn work_types() -> Vec<String> {
    strings(&["Full-time", "Part-time", "Contract", "Remote"])
}

pub(super) fn popular_locations() -> Vec<String> {
    strings(&["Casablanca", "Rabat", "Marrakech", "Remote"])
}

pub(super) type SelectionLog = EventLog<SelectionSet>;
pub(super) type PreferenceLog = EventLog<PreferenceState>;

pub(super) fn title_step(selected: &[&str]) -> (TitleSelection<SelectionLog>, Arc<SelectionLog>) {
    let log = Arc::new(SelectionLog::default());
    let step = TitleSelection::new(title_pool(), selected.iter().copied(), log.clone());
    (step, log)
}

pub(super) fn skill_step(selected: &[&str]) -> (SkillSelection<SelectionLog>, Arc<SelectionLog>) {
    let log = Arc::new(SelectionLog::default());
    let step = SkillSelection::new(skill_pool(), selected.iter().copied(), log.clone());
    (step, log)
}

pub(super) fn preference_step(
    seed: PreferenceSeed,
) -> (PreferenceSelection<PreferenceLog>, Arc<PreferenceLog>) {
    let log = Arc::new(PreferenceLog::default());
    let step = PreferenceSelection::new(seed, work_types(), popular_locations(), log.clone());
    (step, log)
}

pub(super) fn changed_values<T: Clone>(log: &EventLog<T>) -> Vec<T> {
    log.events()
        .into_iter()
        .filter_map(|event| match event {
            StepEvent::Changed(value) => Some(value),
            _ => None,
        })
        .collect()
}
