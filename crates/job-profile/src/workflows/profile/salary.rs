use serde::{Deserialize, Serialize};

/// Expected monthly salary bounds. `min <= max` holds after every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SalaryRangeFields")]
pub struct SalaryRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct SalaryRangeFields {
    min: u32,
    max: u32,
}

impl From<SalaryRangeFields> for SalaryRange {
    fn from(fields: SalaryRangeFields) -> Self {
        Self::new(fields.min, fields.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBound {
    Min,
    Max,
}

impl SalaryBound {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl SalaryRange {
    pub const DEFAULT_MIN: u32 = 5_000;
    pub const DEFAULT_MAX: u32 = 15_000;

    /// Build a range, raising `max` to `min` when the bounds are inverted.
    pub const fn new(min: u32, max: u32) -> Self {
        let max = if max < min { min } else { max };
        Self { min, max }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub fn set_min(&mut self, min: u32) {
        self.min = min;
        if min > self.max {
            self.max = min;
        }
    }

    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        if max < self.min {
            self.min = max;
        }
    }

    pub fn set(&mut self, bound: SalaryBound, value: u32) {
        match bound {
            SalaryBound::Min => self.set_min(value),
            SalaryBound::Max => self.set_max(value),
        }
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// Parse the raw text of a salary field. Anything that is not a whole,
/// non-negative number yields `None`.
pub fn parse_salary_input(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}
