use super::salary::SalaryRange;

pub const MAX_TITLES: usize = 5;
pub const MIN_SKILLS: usize = 3;

/// Gating thresholds applied by the profile steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRules {
    pub max_titles: usize,
    pub min_skills: usize,
    pub default_salary: SalaryRange,
}

impl Default for ProfileRules {
    fn default() -> Self {
        Self {
            max_titles: MAX_TITLES,
            min_skills: MIN_SKILLS,
            default_salary: SalaryRange::default(),
        }
    }
}
