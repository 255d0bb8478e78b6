use super::common::*;
use crate::workflows::profile::{SelectionSet, StepEvent, ToggleOutcome, MAX_TITLES};

#[test]
fn sixth_title_is_rejected_and_rendered_disabled() {
    let (mut step, log) = title_step(&[]);
    for title in ["Backend Engineer", "Frontend Engineer", "DevOps", "QA", "PM"] {
        assert_eq!(step.toggle(title), ToggleOutcome::Added);
    }

    assert_eq!(step.toggle("Data Scientist"), ToggleOutcome::Rejected);
    assert_eq!(
        step.selection().as_slice(),
        ["Backend Engineer", "Frontend Engineer", "DevOps", "QA", "PM"]
    );
    assert!(!step.is_title_enabled("Data Scientist"));
    assert!(step.is_title_enabled("QA"), "selected titles stay removable");

    let view = step.view();
    let row = view
        .candidates
        .iter()
        .find(|row| row.label == "Data Scientist")
        .expect("candidate listed");
    assert!(row.disabled && !row.selected);
    assert_eq!(view.max_selected, Some(MAX_TITLES));
    assert!(log.events().is_empty(), "toggles do not notify");
}

#[test]
fn removal_reopens_capacity() {
    let (mut step, _log) =
        title_step(&["Backend Engineer", "Frontend Engineer", "DevOps", "QA", "PM"]);
    assert_eq!(step.toggle("QA"), ToggleOutcome::Removed);
    assert_eq!(step.toggle("Data Scientist"), ToggleOutcome::Added);
    assert_eq!(step.selection().len(), MAX_TITLES);
}

#[test]
fn selection_never_exceeds_cap_over_long_toggle_sequence() {
    let (mut step, _log) = title_step(&[]);
    let pool = title_pool();
    for round in 0..40 {
        let title = &pool[(round * 3) % pool.len()];
        step.toggle(title);
        assert!(step.selection().len() <= MAX_TITLES);
    }
}

#[test]
fn custom_cap_applies_and_oversized_seed_is_kept() {
    let (step, _log) = title_step(&["QA", "PM", "DevOps"]);
    let mut step = step.with_max_titles(2);
    assert_eq!(step.selection().len(), 3);
    assert_eq!(step.toggle("Backend Engineer"), ToggleOutcome::Rejected);
    assert_eq!(step.toggle("PM"), ToggleOutcome::Removed);
    assert_eq!(step.toggle("Backend Engineer"), ToggleOutcome::Rejected);
    assert_eq!(step.toggle("DevOps"), ToggleOutcome::Removed);
    assert_eq!(step.toggle("Backend Engineer"), ToggleOutcome::Added);
}

#[test]
fn search_filters_case_insensitively() {
    let (mut step, _log) = title_step(&[]);
    step.set_query("eng");
    assert_eq!(
        step.filtered_titles(),
        ["Backend Engineer", "Frontend Engineer", "engineering manager"]
    );
    assert_eq!(step.view().query, "eng");
}

#[test]
fn commit_requires_a_title_and_reports_selection() {
    let (mut step, log) = title_step(&[]);
    assert!(!step.can_continue());
    assert!(!step.commit());
    assert!(log.events().is_empty());

    step.toggle("PM");
    step.toggle("QA");
    assert!(step.commit());
    assert_eq!(
        log.events(),
        vec![StepEvent::Changed(SelectionSet::seeded(["PM", "QA"]))]
    );
}

#[test]
fn back_notifies_without_touching_state() {
    let (mut step, log) = title_step(&["PM"]);
    step.toggle("QA");
    step.back();
    assert_eq!(log.events(), vec![StepEvent::Back]);
    assert_eq!(step.selection().as_slice(), ["PM", "QA"]);
}
