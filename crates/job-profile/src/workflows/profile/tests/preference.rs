use super::common::*;
use crate::workflows::profile::{
    PreferenceSeed, SalaryBound, SalaryRange, SelectionSet, StepEvent, ToggleOutcome,
};

#[test]
fn absent_seed_fields_take_defaults() {
    let (step, log) = preference_step(PreferenceSeed::default());
    let state = step.state();
    assert!(state.work_type.is_empty());
    assert!(state.locations.is_empty());
    assert_eq!(state.salary_range, SalaryRange::new(5_000, 15_000));
    assert!(log.events().is_empty(), "seeding does not notify");
}

#[test]
fn seed_values_are_kept() {
    let seed = PreferenceSeed {
        work_type: Some(strings(&["Remote"])),
        salary_range: None,
        locations: Some(strings(&["Rabat", "Rabat"])),
    };
    let (step, _log) = preference_step(seed);
    assert_eq!(step.state().work_type.as_slice(), ["Remote"]);
    assert_eq!(step.state().locations.as_slice(), ["Rabat"]);
    assert!(step.can_complete());
}

#[test]
fn raising_min_above_max_clamps_max() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    assert!(step.edit_salary(SalaryBound::Min, "20000"));
    assert_eq!(step.state().salary_range, SalaryRange::new(20_000, 20_000));
    assert_eq!(
        log.last_changed().map(|state| state.salary_range),
        Some(SalaryRange::new(20_000, 20_000))
    );
}

#[test]
fn lowering_max_below_min_clamps_min() {
    let (mut step, _log) = preference_step(PreferenceSeed::default());
    assert!(step.edit_salary(SalaryBound::Max, "1000"));
    let range = step.state().salary_range;
    assert_eq!((range.min(), range.max()), (1_000, 1_000));
}

#[test]
fn every_emitted_salary_range_is_consistent() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    let edits = [
        (SalaryBound::Max, "3000"),
        (SalaryBound::Min, "45000"),
        (SalaryBound::Max, "60000"),
        (SalaryBound::Min, "0"),
        (SalaryBound::Max, "0"),
    ];
    for (bound, raw) in edits {
        step.edit_salary(bound, raw);
        let range = step.state().salary_range;
        assert!(range.min() <= range.max());
    }
    for state in changed_values(&log) {
        assert!(state.salary_range.min() <= state.salary_range.max());
    }
}

#[test]
fn non_numeric_salary_is_a_no_op() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    step.edit_salary(SalaryBound::Min, "7000");
    assert!(!step.edit_salary(SalaryBound::Min, "seven thousand"));
    assert!(!step.edit_salary(SalaryBound::Max, ""));
    assert_eq!(step.state().salary_range, SalaryRange::new(7_000, 15_000));
    assert_eq!(changed_values(&log).len(), 1);
}

#[test]
fn each_change_is_emitted_in_order() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    assert_eq!(step.toggle_work_type("Remote"), ToggleOutcome::Added);
    step.edit_salary(SalaryBound::Max, "18000");
    step.add_suggested_location("Rabat");
    assert_eq!(step.toggle_work_type("Remote"), ToggleOutcome::Removed);

    let emitted = changed_values(&log);
    assert_eq!(emitted.len(), 4);
    assert_eq!(emitted[0].work_type, SelectionSet::seeded(["Remote"]));
    assert_eq!(emitted[1].salary_range.max(), 18_000);
    assert_eq!(emitted[2].locations.as_slice(), ["Rabat"]);
    assert!(emitted[3].work_type.is_empty());
    assert_eq!(&emitted[3], step.state());
}

#[test]
fn free_text_location_is_trimmed_and_input_cleared() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    step.set_location_input("   ");
    assert!(!step.add_location_from_input());

    step.set_location_input("  Tangier ");
    assert!(step.add_location_from_input());
    assert_eq!(step.state().locations.as_slice(), ["Tangier"]);
    assert_eq!(step.location_input(), "");

    step.set_location_input("Tangier");
    assert!(!step.add_location_from_input());
    assert_eq!(step.location_input(), "Tangier", "ignored input is kept");
    assert_eq!(changed_values(&log).len(), 1);
}

#[test]
fn location_duplicates_use_exact_string_equality() {
    let (mut step, _log) = preference_step(PreferenceSeed::default());
    step.set_location_input("casablanca");
    assert!(step.add_location_from_input());
    assert!(step.add_suggested_location("Casablanca"));
    assert!(!step.add_suggested_location("Casablanca"));
    assert_eq!(step.state().locations.as_slice(), ["casablanca", "Casablanca"]);
}

#[test]
fn selected_suggestions_render_disabled() {
    let (mut step, _log) = preference_step(PreferenceSeed::default());
    step.add_suggested_location("Rabat");
    assert!(!step.is_suggestion_enabled("Rabat"));
    assert!(step.is_suggestion_enabled("Marrakech"));

    let view = step.view();
    let disabled: Vec<_> = view
        .suggestions
        .iter()
        .filter(|row| row.disabled)
        .map(|row| row.label.as_str())
        .collect();
    assert_eq!(disabled, ["Rabat"]);
}

#[test]
fn remove_location_by_exact_value() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    step.add_suggested_location("Rabat");
    step.add_suggested_location("Remote");
    assert!(!step.remove_location("rabat"));
    assert!(step.remove_location("Rabat"));
    assert_eq!(step.state().locations.as_slice(), ["Remote"]);
    assert!(step.is_suggestion_enabled("Rabat"));
    assert_eq!(changed_values(&log).len(), 3);
}

#[test]
fn completion_requires_work_type_and_location() {
    let (mut step, log) = preference_step(PreferenceSeed::default());
    step.edit_salary(SalaryBound::Min, "90000");
    assert!(!step.can_complete());
    assert!(!step.complete());

    step.toggle_work_type("Contract");
    assert!(!step.can_complete());

    step.add_suggested_location("Marrakech");
    assert!(step.can_complete());
    assert!(step.view().can_complete);
    assert!(step.complete());
    assert_eq!(log.events().last(), Some(&StepEvent::Completed));

    step.remove_location("Marrakech");
    assert!(!step.can_complete(), "still editable after completion");
}

#[test]
fn back_notifies_unconditionally() {
    let (step, log) = preference_step(PreferenceSeed::default());
    step.back();
    assert_eq!(log.events(), vec![StepEvent::Back]);
}
