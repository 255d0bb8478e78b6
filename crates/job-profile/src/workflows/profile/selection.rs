use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free picks from a candidate pool.
///
/// Order is insertion order, which is also the display order of the removable
/// chips. Equality between entries is exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SelectionSet {
    values: Vec<String>,
}

/// Upper bound applied when toggling a value into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCap {
    Unbounded,
    AtMost(usize),
}

impl SelectionCap {
    pub const fn admits(self, current_len: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::AtMost(limit) => current_len < limit,
        }
    }
}

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected,
}

impl ToggleOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Rejected)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Rejected => "rejected",
        }
    }
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a snapshot, keeping the first occurrence of
    /// each value.
    pub fn seeded<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for value in values {
            set.insert(value);
        }
        set
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|existing| existing == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Append `value` unless it is already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|existing| existing != value);
        self.values.len() != before
    }

    /// Remove `value` when present, otherwise append it if `cap` allows.
    pub fn toggle(&mut self, value: &str, cap: SelectionCap) -> ToggleOutcome {
        if self.remove(value) {
            return ToggleOutcome::Removed;
        }
        if !cap.admits(self.values.len()) {
            return ToggleOutcome::Rejected;
        }
        self.values.push(value.to_owned());
        ToggleOutcome::Added
    }
}

impl From<Vec<String>> for SelectionSet {
    fn from(values: Vec<String>) -> Self {
        Self::seeded(values)
    }
}

impl From<SelectionSet> for Vec<String> {
    fn from(set: SelectionSet) -> Self {
        set.values
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
