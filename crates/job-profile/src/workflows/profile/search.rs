/// Free-text filter over a candidate pool.
///
/// Matching is a case-insensitive substring test; an empty query matches
/// every candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    query: String,
    needle: String,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        let mut filter = Self::default();
        filter.set_query(query);
        filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.to_lowercase();
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.needle.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.needle.is_empty() || candidate.to_lowercase().contains(&self.needle)
    }

    pub fn apply<'a, S>(&self, pool: &'a [S]) -> Vec<&'a str>
    where
        S: AsRef<str>,
    {
        pool.iter()
            .map(AsRef::as_ref)
            .filter(|candidate| self.matches(candidate))
            .collect()
    }
}
