use job_profile::workflows::profile::{ActionScript, ProfileAction, ProfileStep, SalaryBound};

#[test]
fn fixture_script_parses_every_row() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/profile_setup.csv");
    let script = ActionScript::from_path(path).expect("fixture script parses");

    assert_eq!(script.len(), 26);
    let first = &script.actions()[0];
    assert_eq!(first.line, 2);
    assert_eq!(first.step, ProfileStep::Title);
    assert_eq!(first.action, ProfileAction::Search("eng".to_string()));

    assert!(script.actions().iter().any(|scripted| scripted.action
        == ProfileAction::EditSalary {
            bound: SalaryBound::Max,
            raw: "lots".to_string(),
        }));
    let padded = ProfileAction::LocationInput("  casablanca ".to_string());
    assert!(script
        .actions()
        .iter()
        .any(|scripted| scripted.action == padded));
}

#[test]
fn blank_search_value_clears_query() {
    let csv = "step,action,value\ntitle,search,\n";
    let script = ActionScript::from_reader(csv.as_bytes()).expect("parses");
    assert_eq!(script.actions()[0].action, ProfileAction::Search(String::new()));
}
