use serde::Serialize;

use super::salary::SalaryRange;

/// A selectable entry in a filtered candidate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRow {
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Render model for the title and skill steps.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub step: &'static str,
    pub query: String,
    pub candidates: Vec<CandidateRow>,
    pub chips: Vec<String>,
    pub selected_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<usize>,
    pub can_continue: bool,
}

/// Render model for the preference step.
#[derive(Debug, Clone, Serialize)]
pub struct PreferenceView {
    pub work_types: Vec<CandidateRow>,
    pub salary_range: SalaryRange,
    pub location_input: String,
    pub locations: Vec<String>,
    pub suggestions: Vec<CandidateRow>,
    pub can_complete: bool,
}
