use crate::session::{ActionReport, ProfileSummary};
use job_profile::workflows::profile::{CandidateRow, PreferenceView, SelectionView};

fn row_marker(row: &CandidateRow) -> &'static str {
    match (row.selected, row.disabled) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    }
}

fn push_rows(out: &mut String, rows: &[CandidateRow]) {
    for row in rows {
        out.push_str(&format!("  {} {}\n", row_marker(row), row.label));
    }
}

pub(crate) fn selection_view(view: &SelectionView) -> String {
    let mut out = String::new();
    let limit = match view.max_selected {
        Some(max) => format!("{}/{max}", view.selected_count),
        None => view.selected_count.to_string(),
    };
    out.push_str(&format!("Step: {} ({limit} selected)\n", view.step));
    if !view.query.is_empty() {
        out.push_str(&format!("Search: \"{}\"\n", view.query));
    }
    push_rows(&mut out, &view.candidates);
    if view.chips.is_empty() {
        out.push_str("Selected: none\n");
    } else {
        out.push_str(&format!("Selected: {}\n", view.chips.join(", ")));
    }
    out.push_str(&format!(
        "Continue: {}\n",
        if view.can_continue { "enabled" } else { "disabled" }
    ));
    out
}

pub(crate) fn preference_view(view: &PreferenceView) -> String {
    let mut out = String::from("Step: preferences\nWork types\n");
    push_rows(&mut out, &view.work_types);
    out.push_str(&format!(
        "Salary range: {} - {}\n",
        view.salary_range.min(),
        view.salary_range.max()
    ));
    if !view.location_input.is_empty() {
        out.push_str(&format!("Location input: \"{}\"\n", view.location_input));
    }
    if view.locations.is_empty() {
        out.push_str("Locations: none\n");
    } else {
        out.push_str(&format!("Locations: {}\n", view.locations.join(", ")));
    }
    out.push_str("Popular locations\n");
    push_rows(&mut out, &view.suggestions);
    out.push_str(&format!(
        "Complete Profile: {}\n",
        if view.can_complete { "enabled" } else { "disabled" }
    ));
    out
}

pub(crate) fn action_report(report: &ActionReport) -> String {
    format!(
        "line {:>3} | {:<10} | {:<16} | {}",
        report.line,
        report.step.label(),
        report.action,
        report.outcome.describe()
    )
}

pub(crate) fn summary(summary: &ProfileSummary) -> String {
    let mut out = String::from("Profile summary\n");
    out.push_str(&format!("- Job titles: {}\n", join_or_none(summary.job_titles.as_slice())));
    out.push_str(&format!("- Skills: {}\n", join_or_none(summary.skills.as_slice())));
    out.push_str(&format!(
        "- Work types: {}\n",
        join_or_none(summary.preferences.work_type.as_slice())
    ));
    out.push_str(&format!(
        "- Salary range: {} - {}\n",
        summary.preferences.salary_range.min(),
        summary.preferences.salary_range.max()
    ));
    out.push_str(&format!(
        "- Locations: {}\n",
        join_or_none(summary.preferences.locations.as_slice())
    ));
    match summary.completed_at {
        Some(at) => out.push_str(&format!("- Completed at: {}\n", at.to_rfc3339())),
        None => out.push_str("- Completed at: not completed\n"),
    }
    out
}

fn join_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}
