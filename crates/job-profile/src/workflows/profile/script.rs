//! Recorded wizard interactions, replayable against the profile steps.
//!
//! Scripts are CSV files with a `step,action,value` header, one user action
//! per row:
//!
//! ```text
//! step,action,value
//! title,search,eng
//! title,toggle,Backend Engineer
//! title,continue,
//! preference,salary_min,20000
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::salary::SalaryBound;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStep {
    Title,
    Skill,
    Preference,
}

impl ProfileStep {
    pub const fn ordered() -> [Self; 3] {
        [Self::Title, Self::Skill, Self::Preference]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Job Titles",
            Self::Skill => "Skills",
            Self::Preference => "Preferences",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Title => Some(Self::Skill),
            Self::Skill => Some(Self::Preference),
            Self::Preference => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Title => None,
            Self::Skill => Some(Self::Title),
            Self::Preference => Some(Self::Skill),
        }
    }
}

/// A single user interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum ProfileAction {
    Search(String),
    Toggle(String),
    Continue,
    Back,
    ToggleWorkType(String),
    EditSalary { bound: SalaryBound, raw: String },
    LocationInput(String),
    AddLocation,
    SuggestLocation(String),
    RemoveLocation(String),
    Complete,
}

impl ProfileAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Toggle(_) => "toggle",
            Self::Continue => "continue",
            Self::Back => "back",
            Self::ToggleWorkType(_) => "toggle_work_type",
            Self::EditSalary {
                bound: SalaryBound::Min,
                ..
            } => "salary_min",
            Self::EditSalary {
                bound: SalaryBound::Max,
                ..
            } => "salary_max",
            Self::LocationInput(_) => "location_input",
            Self::AddLocation => "add_location",
            Self::SuggestLocation(_) => "suggest_location",
            Self::RemoveLocation(_) => "remove_location",
            Self::Complete => "complete",
        }
    }

    /// Whether `step` exposes a control for this action.
    pub fn applies_to(&self, step: ProfileStep) -> bool {
        match self {
            Self::Back => true,
            Self::Search(_) | Self::Toggle(_) | Self::Continue => {
                matches!(step, ProfileStep::Title | ProfileStep::Skill)
            }
            Self::ToggleWorkType(_)
            | Self::EditSalary { .. }
            | Self::LocationInput(_)
            | Self::AddLocation
            | Self::SuggestLocation(_)
            | Self::RemoveLocation(_)
            | Self::Complete => step == ProfileStep::Preference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedAction {
    pub line: u64,
    pub step: ProfileStep,
    pub action: ProfileAction,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ActionKind {
    Search,
    Toggle,
    Continue,
    Back,
    ToggleWorkType,
    SalaryMin,
    SalaryMax,
    LocationInput,
    AddLocation,
    SuggestLocation,
    RemoveLocation,
    Complete,
}

#[derive(Debug, Deserialize)]
struct ScriptRow {
    step: ProfileStep,
    action: ActionKind,
    #[serde(default, deserialize_with = "empty_string_as_default")]
    value: String,
}

impl ScriptRow {
    fn into_action(self) -> ProfileAction {
        let value = self.value;
        match self.action {
            ActionKind::Search => ProfileAction::Search(value),
            ActionKind::Toggle => ProfileAction::Toggle(value),
            ActionKind::Continue => ProfileAction::Continue,
            ActionKind::Back => ProfileAction::Back,
            ActionKind::ToggleWorkType => ProfileAction::ToggleWorkType(value),
            ActionKind::SalaryMin => ProfileAction::EditSalary {
                bound: SalaryBound::Min,
                raw: value,
            },
            ActionKind::SalaryMax => ProfileAction::EditSalary {
                bound: SalaryBound::Max,
                raw: value,
            },
            ActionKind::LocationInput => ProfileAction::LocationInput(value),
            ActionKind::AddLocation => ProfileAction::AddLocation,
            ActionKind::SuggestLocation => ProfileAction::SuggestLocation(value),
            ActionKind::RemoveLocation => ProfileAction::RemoveLocation(value),
            ActionKind::Complete => ProfileAction::Complete,
        }
    }
}

fn empty_string_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read action script: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid action script: {0}")]
    Csv(#[from] csv::Error),
}

/// Ordered list of scripted actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionScript {
    actions: Vec<ScriptedAction>,
}

impl ActionScript {
    pub fn new(actions: Vec<ScriptedAction>) -> Self {
        Self { actions }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Values are taken verbatim (no trimming) so free-text location input
    /// keeps its surrounding whitespace; only the header columns are trimmed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScriptError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let mut actions = Vec::new();

        for record in csv_reader.records() {
            let record = record?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: ScriptRow = record.deserialize(Some(&headers))?;
            actions.push(ScriptedAction {
                line,
                step: row.step,
                action: row.into_action(),
            });
        }

        Ok(Self { actions })
    }

    pub fn actions(&self) -> &[ScriptedAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
