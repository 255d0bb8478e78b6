use chrono::{DateTime, Utc};
use job_profile::config::AppConfig;
use job_profile::workflows::catalog::CandidateCatalog;
use job_profile::workflows::profile::{
    EventLog, PreferenceSeed, PreferenceSelection, PreferenceState, ProfileAction, ProfileRules,
    ProfileStep, ScriptedAction, SelectionSet, SkillSelection, StepEvent, TitleSelection,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

type SelectionLog = EventLog<SelectionSet>;
type PreferenceLog = EventLog<PreferenceState>;

enum ActiveStep {
    Title(TitleSelection<SelectionLog>),
    Skill(SkillSelection<SelectionLog>),
    Preference(PreferenceSelection<PreferenceLog>),
}

impl ActiveStep {
    fn step(&self) -> ProfileStep {
        match self {
            Self::Title(_) => ProfileStep::Title,
            Self::Skill(_) => ProfileStep::Skill,
            Self::Preference(_) => ProfileStep::Preference,
        }
    }
}

/// Answers accumulated across the steps.
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct ProfileAnswers {
    pub(crate) job_titles: SelectionSet,
    pub(crate) skills: SelectionSet,
    pub(crate) preferences: Option<PreferenceState>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProfileSummary {
    pub(crate) job_titles: SelectionSet,
    pub(crate) skills: SelectionSet,
    pub(crate) preferences: PreferenceState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ActionOutcome {
    Applied,
    Ignored,
    Moved { to: ProfileStep },
    Completed,
    WrongStep { active: ProfileStep },
    NotApplicable,
}

impl ActionOutcome {
    pub(crate) fn is_skipped(&self) -> bool {
        matches!(self, Self::WrongStep { .. } | Self::NotApplicable)
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Applied => "applied".to_string(),
            Self::Ignored => "ignored (no change)".to_string(),
            Self::Moved { to } => format!("moved to {}", to.label()),
            Self::Completed => "profile completed".to_string(),
            Self::WrongStep { active } => format!("skipped: {} is active", active.label()),
            Self::NotApplicable => "skipped: no such control on this step".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ActionReport {
    pub(crate) line: u64,
    pub(crate) step: ProfileStep,
    pub(crate) action: &'static str,
    pub(crate) outcome: ActionOutcome,
}

/// Sequences the three profile steps the way the wizard does: it listens to
/// the active step, records committed answers, and re-seeds a step from
/// those answers whenever it is reopened.
pub(crate) struct WizardSession {
    catalog: CandidateCatalog,
    rules: ProfileRules,
    answers: ProfileAnswers,
    active: ActiveStep,
    selection_log: Arc<SelectionLog>,
    preference_log: Arc<PreferenceLog>,
    completed_at: Option<DateTime<Utc>>,
}

impl WizardSession {
    pub(crate) fn new(catalog: CandidateCatalog, rules: ProfileRules) -> Self {
        let selection_log = Arc::new(SelectionLog::default());
        let active = ActiveStep::Title(
            TitleSelection::new(
                catalog.job_titles().to_vec(),
                Vec::<String>::new(),
                selection_log.clone(),
            )
            .with_max_titles(rules.max_titles),
        );

        Self {
            catalog,
            rules,
            answers: ProfileAnswers::default(),
            active,
            selection_log,
            preference_log: Arc::new(PreferenceLog::default()),
            completed_at: None,
        }
    }

    pub(crate) fn from_config(catalog: CandidateCatalog, config: &AppConfig) -> Self {
        Self::new(catalog, config.rules)
    }

    pub(crate) fn active_step(&self) -> ProfileStep {
        self.active.step()
    }

    pub(crate) fn answers(&self) -> &ProfileAnswers {
        &self.answers
    }

    pub(crate) fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub(crate) fn summary(&self) -> ProfileSummary {
        let preferences = self
            .answers
            .preferences
            .clone()
            .unwrap_or_else(|| PreferenceSeed::default().into_state(self.rules.default_salary));

        ProfileSummary {
            job_titles: self.answers.job_titles.clone(),
            skills: self.answers.skills.clone(),
            preferences,
            completed_at: self.completed_at,
        }
    }

    pub(crate) fn render(&self) -> String {
        match &self.active {
            ActiveStep::Title(step) => crate::render::selection_view(&step.view()),
            ActiveStep::Skill(step) => crate::render::selection_view(&step.view()),
            ActiveStep::Preference(step) => crate::render::preference_view(&step.view()),
        }
    }

    pub(crate) fn apply(&mut self, scripted: &ScriptedAction) -> ActionReport {
        let outcome = self.dispatch(scripted.step, &scripted.action);
        debug!(
            line = scripted.line,
            action = scripted.action.label(),
            outcome = ?outcome,
            "scripted action applied"
        );
        ActionReport {
            line: scripted.line,
            step: scripted.step,
            action: scripted.action.label(),
            outcome,
        }
    }

    fn dispatch(&mut self, step: ProfileStep, action: &ProfileAction) -> ActionOutcome {
        let active = self.active.step();
        if step != active {
            return ActionOutcome::WrongStep { active };
        }
        if !action.applies_to(step) {
            return ActionOutcome::NotApplicable;
        }

        let changed = match (&mut self.active, action) {
            (ActiveStep::Title(step), ProfileAction::Search(query)) => {
                step.set_query(query.as_str());
                true
            }
            (ActiveStep::Skill(step), ProfileAction::Search(query)) => {
                step.set_query(query.as_str());
                true
            }
            (ActiveStep::Title(step), ProfileAction::Toggle(value)) => {
                step.toggle(value).changed()
            }
            (ActiveStep::Skill(step), ProfileAction::Toggle(value)) => {
                step.toggle(value).changed()
            }
            (ActiveStep::Title(step), ProfileAction::Continue) => step.commit(),
            (ActiveStep::Skill(step), ProfileAction::Continue) => step.commit(),
            (ActiveStep::Title(step), ProfileAction::Back) => {
                step.back();
                true
            }
            (ActiveStep::Skill(step), ProfileAction::Back) => {
                step.back();
                true
            }
            (ActiveStep::Preference(step), ProfileAction::Back) => {
                step.back();
                true
            }
            (ActiveStep::Preference(step), ProfileAction::ToggleWorkType(value)) => {
                step.toggle_work_type(value).changed()
            }
            (ActiveStep::Preference(step), ProfileAction::EditSalary { bound, raw }) => {
                step.edit_salary(*bound, raw)
            }
            (ActiveStep::Preference(step), ProfileAction::LocationInput(text)) => {
                step.set_location_input(text.as_str());
                true
            }
            (ActiveStep::Preference(step), ProfileAction::AddLocation) => {
                step.add_location_from_input()
            }
            (ActiveStep::Preference(step), ProfileAction::SuggestLocation(value)) => {
                step.add_suggested_location(value)
            }
            (ActiveStep::Preference(step), ProfileAction::RemoveLocation(value)) => {
                step.remove_location(value)
            }
            (ActiveStep::Preference(step), ProfileAction::Complete) => step.complete(),
            _ => return ActionOutcome::NotApplicable,
        };

        match self.settle() {
            Some(outcome) => outcome,
            None if changed => ActionOutcome::Applied,
            None => ActionOutcome::Ignored,
        }
    }

    /// Consume notifications from the active step and react to them in order.
    fn settle(&mut self) -> Option<ActionOutcome> {
        let mut outcome = None;

        for event in self.selection_log.drain() {
            let step = self.active.step();
            match event {
                StepEvent::Changed(selection) => {
                    match step {
                        ProfileStep::Title => self.answers.job_titles = selection,
                        ProfileStep::Skill => self.answers.skills = selection,
                        ProfileStep::Preference => {}
                    }
                    if let Some(next) = step.next() {
                        self.open(next);
                        outcome = Some(ActionOutcome::Moved { to: next });
                    }
                }
                StepEvent::Back => {
                    if let Some(previous) = step.previous() {
                        self.open(previous);
                        outcome = Some(ActionOutcome::Moved { to: previous });
                    }
                }
                StepEvent::Completed => {}
            }
        }

        for event in self.preference_log.drain() {
            match event {
                StepEvent::Changed(state) => self.answers.preferences = Some(state),
                StepEvent::Back => {
                    self.open(ProfileStep::Skill);
                    outcome = Some(ActionOutcome::Moved {
                        to: ProfileStep::Skill,
                    });
                }
                StepEvent::Completed => {
                    let now = Utc::now();
                    info!(completed_at = %now, "profile setup completed");
                    self.completed_at = Some(now);
                    outcome = Some(ActionOutcome::Completed);
                }
            }
        }

        outcome
    }

    fn open(&mut self, step: ProfileStep) {
        debug!(step = step.label(), "opening profile step");
        self.active = match step {
            ProfileStep::Title => ActiveStep::Title(
                TitleSelection::new(
                    self.catalog.job_titles().to_vec(),
                    self.answers.job_titles.iter().map(str::to_owned),
                    self.selection_log.clone(),
                )
                .with_max_titles(self.rules.max_titles),
            ),
            ProfileStep::Skill => ActiveStep::Skill(
                SkillSelection::new(
                    self.catalog.skills().to_vec(),
                    self.answers.skills.iter().map(str::to_owned),
                    self.selection_log.clone(),
                )
                .with_min_skills(self.rules.min_skills),
            ),
            ProfileStep::Preference => {
                let seed = self
                    .answers
                    .preferences
                    .clone()
                    .map(PreferenceSeed::from)
                    .unwrap_or_default();
                ActiveStep::Preference(PreferenceSelection::with_default_salary(
                    seed,
                    self.rules.default_salary,
                    self.catalog.work_types().to_vec(),
                    self.catalog.popular_locations().to_vec(),
                    self.preference_log.clone(),
                ))
            }
        };
    }
}
