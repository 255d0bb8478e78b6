//! Candidate pools offered by the profile steps.

mod normalizer;
mod parser;
mod standard;

use crate::workflows::profile::SearchFilter;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::info;

use parser::CatalogRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    JobTitle,
    Skill,
    WorkType,
    Location,
}

impl CatalogKind {
    pub const fn ordered() -> [Self; 4] {
        [Self::JobTitle, Self::Skill, Self::WorkType, Self::Location]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobTitle => "Job Titles",
            Self::Skill => "Skills",
            Self::WorkType => "Work Types",
            Self::Location => "Popular Locations",
        }
    }
}

/// Immutable lookup tables for every selector in the profile wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCatalog {
    job_titles: Vec<String>,
    skills: Vec<String>,
    work_types: Vec<String>,
    popular_locations: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

impl CandidateCatalog {
    pub fn standard() -> Self {
        Self {
            job_titles: owned(standard::JOB_TITLES),
            skills: owned(standard::SKILLS),
            work_types: owned(standard::WORK_TYPES),
            popular_locations: owned(standard::POPULAR_LOCATIONS),
        }
    }

    pub fn pool(&self, kind: CatalogKind) -> &[String] {
        match kind {
            CatalogKind::JobTitle => &self.job_titles,
            CatalogKind::Skill => &self.skills,
            CatalogKind::WorkType => &self.work_types,
            CatalogKind::Location => &self.popular_locations,
        }
    }

    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn work_types(&self) -> &[String] {
        &self.work_types
    }

    pub fn popular_locations(&self) -> &[String] {
        &self.popular_locations
    }

    pub fn search(&self, kind: CatalogKind, filter: &SearchFilter) -> Vec<&str> {
        filter.apply(self.pool(kind))
    }

    fn pool_mut(&mut self, kind: CatalogKind) -> &mut Vec<String> {
        match kind {
            CatalogKind::JobTitle => &mut self.job_titles,
            CatalogKind::Skill => &mut self.skills,
            CatalogKind::WorkType => &mut self.work_types,
            CatalogKind::Location => &mut self.popular_locations,
        }
    }
}

impl Default for CandidateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read candidate catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate catalog CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Builds a [`CandidateCatalog`] from a `kind,value` CSV export.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<CandidateCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Kinds with no rows in the export keep the standard table.
    pub fn from_reader<R: Read>(reader: R) -> Result<CandidateCatalog, CatalogImportError> {
        let records = parser::parse_records(reader)?;
        Ok(apply_records(records))
    }
}

fn apply_records(records: Vec<CatalogRecord>) -> CandidateCatalog {
    let mut catalog = CandidateCatalog::standard();
    let mut replaced = Vec::new();

    for record in records {
        let pool = catalog.pool_mut(record.kind);
        if !replaced.contains(&record.kind) {
            pool.clear();
            replaced.push(record.kind);
        }
        if !pool.contains(&record.value) {
            pool.push(record.value);
        }
    }

    for kind in CatalogKind::ordered() {
        info!(
            kind = kind.label(),
            entries = catalog.pool(kind).len(),
            imported = replaced.contains(&kind),
            "candidate pool loaded"
        );
    }

    catalog
}
